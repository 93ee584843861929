//! # Byte-wide MMIO Register Access
//!
//! Device registers live at ordinary addresses, so plain loads and stores
//! would be fair game for the optimizer: it may merge, reorder or drop
//! accesses that have no visible effect on normal memory. Every access made
//! through [`MmioRegister`] is a volatile load or store and is therefore
//! emitted exactly once, in program order relative to other volatile accesses.

use core::ptr;

/// A single byte-wide memory-mapped register.
///
/// The address is validated once, by the `unsafe` constructor. After that
/// reads and writes are safe to call: the type carries the proof that the
/// address designates a live device register.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MmioRegister {
    addr: usize,
}

impl MmioRegister {
    /// Wraps the register at `addr`.
    ///
    /// # Safety
    /// `addr` must designate a mapped, byte-addressable device register (or
    /// memory standing in for one) for as long as the returned value or any
    /// copy of it is used.
    #[inline]
    #[must_use]
    pub const unsafe fn new(addr: usize) -> Self {
        Self { addr }
    }

    /// The address of this register.
    #[inline]
    #[must_use]
    pub const fn addr(self) -> usize {
        self.addr
    }

    /// Volatile load of the register.
    #[inline]
    #[must_use]
    pub fn read(self) -> u8 {
        // SAFETY: upheld by the caller of `new`.
        unsafe { ptr::read_volatile(ptr::with_exposed_provenance::<u8>(self.addr)) }
    }

    /// Volatile store to the register.
    #[inline]
    pub fn write(self, value: u8) {
        // SAFETY: upheld by the caller of `new`.
        unsafe { ptr::write_volatile(ptr::with_exposed_provenance_mut::<u8>(self.addr), value) }
    }
}

/// Byte-wide access to a block of device registers addressed by offset.
///
/// [`MmioBlock`] is the hardware implementation. Anything else implementing
/// it stands in for a chip and is free to record or script the accesses.
pub trait RegisterIo {
    /// Reads the register at `offset` from the start of the block.
    fn read(&self, offset: usize) -> u8;

    /// Writes `value` to the register at `offset` from the start of the block.
    fn write(&self, offset: usize, value: u8);
}

impl<R: RegisterIo + ?Sized> RegisterIo for &R {
    #[inline]
    fn read(&self, offset: usize) -> u8 {
        (**self).read(offset)
    }

    #[inline]
    fn write(&self, offset: usize, value: u8) {
        (**self).write(offset, value);
    }
}

/// A memory-mapped register block starting at a fixed base address.
#[derive(Debug, PartialEq, Eq)]
pub struct MmioBlock {
    base: usize,
}

impl MmioBlock {
    /// Wraps the register block at `base`.
    ///
    /// # Safety
    /// Every offset later passed to [`RegisterIo::read`] or
    /// [`RegisterIo::write`] must designate a mapped device register (or
    /// memory standing in for one) for as long as the block is used.
    #[inline]
    #[must_use]
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Base address of the block.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// The register at `offset`.
    #[inline]
    #[must_use]
    pub const fn register(&self, offset: usize) -> MmioRegister {
        // SAFETY: upheld by the caller of `new`.
        unsafe { MmioRegister::new(self.base + offset) }
    }
}

impl RegisterIo for MmioBlock {
    #[inline]
    fn read(&self, offset: usize) -> u8 {
        self.register(offset).read()
    }

    #[inline]
    fn write(&self, offset: usize, value: u8) {
        self.register(offset).write(value);
    }
}
