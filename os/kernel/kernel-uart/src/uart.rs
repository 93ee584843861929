use crate::mmio::{MmioBlock, RegisterIo};
use crate::registers::{self, FCR_INIT, IER_INIT, LCR_INIT, LineStatus};
use crate::{BytePoll, ByteSink};
use core::fmt;

/// An owned handle to a configured 16550-compatible UART.
///
/// Output is unbuffered and has no flow control: [`put`](Self::put) stores
/// straight into the transmit holding register. Input is **polled**:
/// [`get`](Self::get) checks the line status once and returns immediately.
///
/// The hardware handle `Uart<MmioBlock>` is obtained through the `unsafe`
/// [`Uart::new`] only, and no handle is `Clone` or `Copy`.
#[derive(Debug)]
pub struct Uart<R = MmioBlock> {
    io: R,
}

impl Uart {
    /// Configures the UART at `base` and takes ownership of it.
    ///
    /// Performs the configuration stores of [`Uart::from_io`].
    ///
    /// # Safety
    /// - `base` must be the base address of a 16550-compatible register block
    ///   that is mapped and powered, and must stay so for the lifetime of the
    ///   returned value.
    /// - No other `Uart` may exist for the same `base`.
    #[must_use]
    pub unsafe fn new(base: usize) -> Self {
        // SAFETY: forwarded to the caller; all driver offsets lie in the block.
        Self::from_io(unsafe { MmioBlock::new(base) })
    }

    /// Base address of the register block.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> usize {
        self.io.base()
    }
}

impl<R: RegisterIo> Uart<R> {
    /// Configures the chip behind `io` and takes ownership of it.
    ///
    /// Three stores, in this order:
    ///
    /// 1. line control ← `0b11` (8-bit words),
    /// 2. FIFO control ← `0b1` (FIFOs enabled),
    /// 3. interrupt enable ← `0b1` (received-data-available).
    ///
    /// Line control goes first so the divisor latch is off before offsets 0
    /// and 1 are used as data and interrupt enable.
    #[must_use]
    pub fn from_io(io: R) -> Self {
        io.write(registers::LINE_CONTROL, LCR_INIT.into_bits());
        io.write(registers::FIFO_CONTROL, FCR_INIT.into_bits());
        io.write(registers::INTERRUPT_ENABLE, IER_INIT.into_bits());
        Self { io }
    }

    /// Transmits one byte.
    #[inline]
    pub fn put(&mut self, byte: u8) {
        self.io.write(registers::DATA, byte);
    }

    /// Transmits every byte of `bytes` in order.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put(b);
        }
    }

    /// Polls for one received byte.
    ///
    /// Returns `None` when the receiver has nothing buffered. That is the
    /// normal outcome of polling an idle line, not an error.
    #[inline]
    pub fn get(&mut self) -> Option<u8> {
        if self.line_status().data_ready() {
            Some(self.io.read(registers::DATA))
        } else {
            None
        }
    }

    /// One read of the line status register.
    #[inline]
    #[must_use]
    pub fn line_status(&self) -> LineStatus {
        LineStatus::from_bits(self.io.read(registers::LINE_STATUS))
    }
}

impl<R: RegisterIo> ByteSink for Uart<R> {
    #[inline]
    fn put(&mut self, byte: u8) {
        Self::put(self, byte);
    }
}

impl<R: RegisterIo> BytePoll for Uart<R> {
    #[inline]
    fn poll(&mut self) -> Option<u8> {
        self.get()
    }
}

impl<R: RegisterIo> fmt::Write for Uart<R> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        // UTF-8 encode without allocation.
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }
}
