//! # 16550 Register Model
//!
//! Byte offsets of the registers used by the driver, relative to the chip's
//! base address, and typed models of their bit layouts.
//!
//! ```text
//! base + 0   RBR (read) / THR (write)   receive / transmit holding register
//! base + 1   IER                        interrupt enable
//! base + 2   FCR (write)                FIFO control
//! base + 3   LCR                        line control
//! base + 5   LSR (read)                 line status
//! ```
//!
//! Offset 4 (modem control) is not touched by this driver.

use bitfield_struct::bitfield;

/// Receive buffer (read) and transmit holding register (write).
pub const DATA: usize = 0;

/// Interrupt enable register.
pub const INTERRUPT_ENABLE: usize = 1;

/// FIFO control register.
pub const FIFO_CONTROL: usize = 2;

/// Line control register.
pub const LINE_CONTROL: usize = 3;

/// Line status register.
pub const LINE_STATUS: usize = 5;

/// Number of bytes spanned by the register block the driver addresses.
pub const BLOCK_SIZE: usize = 8;

/// Character width selected by [`LineControl::word_length`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum WordLength {
    Five = 0b00,
    Six = 0b01,
    Seven = 0b10,
    Eight = 0b11,
}

impl WordLength {
    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Five,
            0b01 => Self::Six,
            0b10 => Self::Seven,
            _ => Self::Eight,
        }
    }
}

/// Line control register (LCR, offset 3).
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct LineControl {
    /// Bits 0–1: Word length.
    #[bits(2, default = WordLength::Five)]
    pub word_length: WordLength,

    /// Bit 2: Two stop bits (1.5 for five-bit words) instead of one.
    pub extra_stop_bit: bool,

    /// Bit 3: Parity enable.
    pub parity_enable: bool,

    /// Bit 4: Even parity select.
    pub even_parity: bool,

    /// Bit 5: Stick parity.
    pub stick_parity: bool,

    /// Bit 6: Force the line into the break condition.
    pub set_break: bool,

    /// Bit 7: Divisor latch access (DLAB).
    ///
    /// While set, offsets 0 and 1 address the baud divisor latch instead of
    /// the data and interrupt-enable registers.
    pub divisor_latch_access: bool,
}

/// FIFO control register (FCR, offset 2). Write-only.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct FifoControl {
    /// Bit 0: Enable the transmit and receive FIFOs.
    pub enable: bool,

    /// Bit 1: Clear the receive FIFO.
    pub clear_receive: bool,

    /// Bit 2: Clear the transmit FIFO.
    pub clear_transmit: bool,

    /// Bit 3: DMA mode select.
    pub dma_mode: bool,

    /// Bits 4–5: Reserved.
    #[bits(2, default = 0)]
    _reserved_4_5: u8,

    /// Bits 6–7: Receive FIFO interrupt trigger level.
    #[bits(2)]
    pub trigger_level: u8,
}

/// Interrupt enable register (IER, offset 1).
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct InterruptEnable {
    /// Bit 0: Received data available.
    pub received_data_available: bool,

    /// Bit 1: Transmit holding register empty.
    pub transmit_holding_empty: bool,

    /// Bit 2: Receiver line status.
    pub receiver_line_status: bool,

    /// Bit 3: Modem status.
    pub modem_status: bool,

    /// Bits 4–7: Reserved.
    #[bits(4, default = 0)]
    _reserved_4_7: u8,
}

/// Line status register (LSR, offset 5). Read-only.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct LineStatus {
    /// Bit 0: At least one received byte is waiting in RBR / the receive FIFO.
    pub data_ready: bool,

    /// Bit 1: Overrun error.
    pub overrun_error: bool,

    /// Bit 2: Parity error.
    pub parity_error: bool,

    /// Bit 3: Framing error.
    pub framing_error: bool,

    /// Bit 4: Break interrupt.
    pub break_interrupt: bool,

    /// Bit 5: Transmit holding register empty.
    pub transmit_holding_empty: bool,

    /// Bit 6: Transmitter empty (holding and shift registers idle).
    pub transmitter_empty: bool,

    /// Bit 7: Error in the receive FIFO.
    pub receive_fifo_error: bool,
}

/// LCR value written at construction: 8-bit words, everything else cleared.
pub const LCR_INIT: LineControl = LineControl::new().with_word_length(WordLength::Eight);

/// FCR value written at construction: FIFOs enabled.
pub const FCR_INIT: FifoControl = FifoControl::new().with_enable(true);

/// IER value written at construction: received-data-available interrupt on.
pub const IER_INIT: InterruptEnable = InterruptEnable::new().with_received_data_available(true);
