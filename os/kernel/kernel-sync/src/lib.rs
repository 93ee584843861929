//! # Kernel synchronization primitives
//!
//! Only what the early-boot core needs: a spin lock usable from `static`s.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod spin_lock;

pub use spin_lock::{SpinLock, SpinLockGuard};
