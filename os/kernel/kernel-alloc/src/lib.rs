//! # Kernel Heap Bootstrap
//!
//! The kernel owns a single heap. This crate provides its allocator instance,
//! [`ALLOCATOR`], and the one-shot routine that hands it the memory region the
//! boot environment set aside for it.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──init_heap(bottom, size)──▶ Initialized(bottom, size)
//! ```
//!
//! * The transition happens **at most once**, before the first allocation,
//!   typically on the boot core before any other core is released.
//! * Calling [`init_heap`] twice is undefined behavior. Debug builds catch it
//!   with an assertion; release builds do not pay for a check.
//! * The region is fixed for the lifetime of the kernel. There is no growing,
//!   shrinking or second heap.
//!
//! ## Memory Layout
//!
//! ```text
//! ┌───────────────┐
//! │  .text/.data  │
//! ├───────────────┤
//! │  .bss         │
//! ├───────────────┤
//! │  boot stack   │
//! ├───────────────┤ ◀── bottom
//! │               │
//! │     heap      │  size bytes
//! │               │
//! ├───────────────┤ ◀── bottom + size
//! │  (unused)     │
//! └───────────────┘ ◀── end of usable memory
//! ```
//!
//! ## Global Allocator
//!
//! With the `global-allocator` feature, [`ALLOCATOR`] is registered as the
//! `#[global_allocator]` and `alloc::{boxed::Box, vec::Vec, ...}` become
//! usable right after [`init_heap`] returns.
//!
//! ## Usage
//! ```rust,ignore
//! use kernel_alloc::{HeapRegion, init_heap};
//!
//! unsafe extern "C" {
//!     static _heap_start: u8;
//!     static _memory_end: u8;
//! }
//!
//! let start = (&raw const _heap_start).expose_provenance();
//! let end = (&raw const _memory_end).expose_provenance();
//! let region = HeapRegion::from_bounds(start, end).expect("valid heap layout");
//! unsafe { init_heap(region.bottom(), region.size()) };
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod heap;
mod region;

pub use heap::KernelHeap;
pub use region::{HeapRegion, HeapRegionError};

/// The kernel heap.
#[cfg_attr(feature = "global-allocator", global_allocator)]
pub static ALLOCATOR: KernelHeap = KernelHeap::empty();

/// Hands `[bottom, bottom + size)` to [`ALLOCATOR`].
///
/// # Safety
/// See [`KernelHeap::init`]: at most once, before any allocation, over memory
/// that is exclusively the heap's.
pub unsafe fn init_heap(bottom: usize, size: usize) {
    // SAFETY: forwarded to the caller.
    unsafe { ALLOCATOR.init(bottom, size) }
}
