//! # Heap Region Descriptor

/// A contiguous `[bottom, bottom + size)` range of free memory handed to the
/// heap by the boot environment, typically derived from linker symbols for
/// the memory following the boot stack.
///
/// The checked constructors only rule out descriptors that are malformed on
/// their own (empty, or wrapping the address space). Whether the range is
/// actually unused RAM is the boot environment's responsibility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HeapRegion {
    bottom: usize,
    size: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapRegionError {
    #[error("heap region is empty")]
    Empty,
    #[error("heap region {bottom:#x} + {size:#x} overflows the address space")]
    Overflow { bottom: usize, size: usize },
    #[error("heap region end {end:#x} lies below its start {start:#x}")]
    Inverted { start: usize, end: usize },
}

impl HeapRegion {
    /// Describes `size` bytes starting at `bottom`.
    ///
    /// # Errors
    /// [`HeapRegionError::Empty`] for `size == 0`,
    /// [`HeapRegionError::Overflow`] if `bottom + size` does not fit a `usize`.
    pub const fn new(bottom: usize, size: usize) -> Result<Self, HeapRegionError> {
        if size == 0 {
            return Err(HeapRegionError::Empty);
        }
        if bottom.checked_add(size).is_none() {
            return Err(HeapRegionError::Overflow { bottom, size });
        }
        Ok(Self { bottom, size })
    }

    /// Describes the half-open range `[start, end)`.
    ///
    /// # Errors
    /// [`HeapRegionError::Inverted`] if `end < start`,
    /// [`HeapRegionError::Empty`] if `end == start`.
    pub const fn from_bounds(start: usize, end: usize) -> Result<Self, HeapRegionError> {
        if end < start {
            return Err(HeapRegionError::Inverted { start, end });
        }
        Self::new(start, end - start)
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.bottom
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// One past the last byte of the region.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.bottom + self.size
    }

    /// Whether `addr` lies inside the region.
    #[must_use]
    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.bottom && addr < self.end()
    }
}
