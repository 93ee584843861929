//! # Kernel Heap

use crate::region::HeapRegion;
use core::alloc::{GlobalAlloc, Layout};
use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};
use linked_list_allocator::LockedHeap;

/// The kernel's dynamic-memory allocator.
///
/// Starts out managing no memory. A single call to [`init`](Self::init)
/// hands it its region; from then on every allocation and deallocation goes
/// through it. Free-list bookkeeping is delegated to
/// [`linked_list_allocator`].
///
/// Requests made before `init` find no free memory and fail like any other
/// exhausted allocation (a null return, which the `alloc` crate turns into
/// `handle_alloc_error`).
pub struct KernelHeap {
    heap: LockedHeap,
    /// One-time initialization flag.
    did_init: AtomicBool,
}

impl Default for KernelHeap {
    fn default() -> Self {
        Self::empty()
    }
}

impl KernelHeap {
    /// A heap that does not manage any memory yet.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            heap: LockedHeap::empty(),
            did_init: AtomicBool::new(false),
        }
    }

    /// Assigns the region `[bottom, bottom + size)` to the allocator.
    ///
    /// Debug builds assert that this is the first call; release builds do
    /// not check.
    ///
    /// # Safety
    /// - Must be called **at most once**, before any allocation request on
    ///   this heap.
    /// - The range must be valid, writable, unused memory that stays
    ///   exclusive to the allocator for the rest of the program. In
    ///   particular it must not overlap code, static data or the boot stack.
    /// - `bottom + size` must not overflow.
    /// - `size` must be large enough for the allocator's bookkeeping
    ///   (a few machine words).
    pub unsafe fn init(&self, bottom: usize, size: usize) {
        let first = !self.did_init.swap(true, Ordering::AcqRel);
        debug_assert!(first, "kernel heap initialized twice");

        // SAFETY: forwarded to the caller.
        unsafe {
            self.heap
                .lock()
                .init(ptr::with_exposed_provenance_mut(bottom), size);
        }
        log::info!(
            "heap initialized: {bottom:#x}..{:#x} ({size} bytes)",
            bottom + size
        );
    }

    /// [`init`](Self::init) from a checked descriptor.
    ///
    /// # Safety
    /// As for [`init`](Self::init), minus the overflow requirement which the
    /// descriptor already guarantees.
    pub unsafe fn init_region(&self, region: HeapRegion) {
        // SAFETY: forwarded to the caller.
        unsafe { self.init(region.bottom(), region.size()) }
    }

    /// Whether [`init`](Self::init) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.did_init.load(Ordering::Acquire)
    }

    /// Lowest address of the managed region; `0` before initialization.
    #[must_use]
    pub fn bottom(&self) -> usize {
        self.heap.lock().bottom().expose_provenance()
    }

    /// Size of the managed region in bytes; `0` before initialization.
    #[must_use]
    pub fn size(&self) -> usize {
        self.heap.lock().size()
    }

    /// Bytes currently handed out.
    #[must_use]
    pub fn used(&self) -> usize {
        self.heap.lock().used()
    }

    /// Bytes still available.
    #[must_use]
    pub fn free(&self) -> usize {
        self.heap.lock().free()
    }
}

unsafe impl GlobalAlloc for KernelHeap {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        unsafe { self.heap.alloc(layout) }
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { self.heap.dealloc(ptr, layout) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_heap_reports_nothing() {
        let heap = KernelHeap::empty();
        assert!(!heap.is_initialized());
        assert_eq!(heap.bottom(), 0);
        assert_eq!(heap.size(), 0);
        assert_eq!(heap.used(), 0);
    }

    #[test]
    fn allocation_before_init_fails() {
        let heap = KernelHeap::empty();
        let layout = Layout::from_size_align(16, 8).unwrap();
        assert!(unsafe { heap.alloc(layout) }.is_null());
    }
}
