//! # 16550 UART Driver
//!
//! A polled driver for a 16550-compatible serial chip reachable only through
//! memory-mapped registers at a caller-supplied base address.
//!
//! ## Layers
//!
//! ```text
//! ByteSink / BytePoll        byte-level capabilities any sink may implement
//!     ↑
//! Uart                       owned, configured device handle
//!     ↑
//! RegisterIo / MmioBlock     byte access to the register block by offset
//!     ↑
//! MmioRegister               volatile byte load/store at a fixed address
//!     ↑
//! registers                  offsets and typed bit layouts (LCR, FCR, IER, LSR)
//! ```
//!
//! ## Safety Model
//!
//! The `unsafe` entry point is [`Uart::new`] (or [`MmioBlock::new`] feeding
//! [`Uart::from_io`]): the caller vouches that the base address designates a
//! real, mapped chip. Everything built on an existing [`Uart`] is safe,
//! because the handle itself is the proof.
//!
//! ## Polling
//!
//! Input is **busy-polled**: [`Uart::get`] reads the line status once and
//! returns `None` if nothing arrived. Interrupt-driven input is not provided,
//! even though construction enables the received-data interrupt at the chip.
//!
//! ## Usage
//! ```rust,no_run
//! use core::fmt::Write;
//! use kernel_uart::Uart;
//!
//! // QEMU `virt` machine
//! let mut uart = unsafe { Uart::new(0x1000_0000) };
//! writeln!(uart, "hello").ok();
//! if let Some(b) = uart.get() {
//!     uart.put(b);
//! }
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

pub mod mmio;
pub mod registers;
mod uart;

use core::fmt;

pub use mmio::{MmioBlock, MmioRegister, RegisterIo};
pub use registers::{FifoControl, InterruptEnable, LineControl, LineStatus, WordLength};
pub use uart::Uart;

/// A sink that accepts bytes one at a time and never fails.
pub trait ByteSink {
    fn put(&mut self, byte: u8);

    fn put_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }
}

/// A source that can be polled for a single byte without blocking.
pub trait BytePoll {
    /// Returns the next available byte, or `None` if there is none right now.
    fn poll(&mut self) -> Option<u8>;
}

/// Adapts any [`ByteSink`] to [`core::fmt::Write`].
///
/// Strings are streamed as their UTF-8 bytes. Writing never fails.
pub struct SinkWriter<'a, S: ?Sized>(pub &'a mut S);

impl<S: ByteSink + ?Sized> fmt::Write for SinkWriter<'_, S> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.put_all(s.as_bytes());
        Ok(())
    }
}
