//! # Kernel Console
//!
//! The process-wide console registry: a single slot that holds at most one
//! [`Uart`], guarded by a spin lock, plus the [`print!`] and [`println!`]
//! macros the rest of the kernel uses for formatted output.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized ──init_console(base)──▶ Initialized
//! ```
//!
//! The transition happens once and never reverts. Before it, printing is a
//! silent no-op, which lets early code paths instrument freely without caring
//! whether the console exists yet.
//!
//! ## Atomicity
//!
//! Every `print!`/`println!` renders its whole message while holding the
//! console lock. Output from concurrent callers never interleaves.
//!
//! ## Logging
//!
//! With the `logger` feature (default) [`ConsoleLogger`] routes the `log`
//! facade through the same console.
//!
//! ## Usage
//! ```rust,no_run
//! use kernel_console::{init_console, println};
//!
//! println!("dropped, no console yet");
//! unsafe { init_console(0x1000_0000) };
//! println!("Hello, world!");
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod console;
#[cfg(feature = "logger")]
mod logger;

use core::fmt;
pub use console::Console;
use kernel_uart::Uart;
#[cfg(feature = "logger")]
pub use logger::ConsoleLogger;

/// The kernel console. Empty until [`init_console`] runs.
pub static CONSOLE: Console<Uart> = Console::new();

/// Configures the UART at `base` and installs it as the kernel console.
///
/// The device is constructed while the console lock is held.
///
/// # Safety
/// - The preconditions of [`Uart::new`] apply to `base`.
/// - Must be called at most once.
pub unsafe fn init_console(base: usize) {
    // SAFETY: forwarded to the caller.
    CONSOLE.init_with(|| unsafe { Uart::new(base) });
    log::debug!("console attached to UART at {base:#x}");
}

/// Polls the console UART for one input byte. `None` if there is no console
/// yet or nothing has been received.
#[must_use]
pub fn poll_byte() -> Option<u8> {
    CONSOLE.get()
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments<'_>) {
    CONSOLE.print(args);
}

#[doc(hidden)]
pub fn _println(args: fmt::Arguments<'_>) {
    CONSOLE.println(args);
}

/// Prints to the kernel console. A no-op before [`init_console`].
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {{
        $crate::_print(::core::format_args!($($arg)*));
    }};
}

/// Prints to the kernel console with a trailing newline. A no-op before
/// [`init_console`].
#[macro_export]
macro_rules! println {
    () => {{
        $crate::_println(::core::format_args!(""));
    }};
    ($($arg:tt)*) => {{
        $crate::_println(::core::format_args!($($arg)*));
    }};
}
