//! Exercises the process-wide heap. Everything lives in one test because
//! `init_heap` may run only once per process.

use core::alloc::{GlobalAlloc, Layout};
use kernel_alloc::{ALLOCATOR, HeapRegion, init_heap};

const HEAP_SIZE: usize = 32 * 1024;

#[repr(C, align(16))]
struct Arena([u8; HEAP_SIZE]);

#[test]
fn global_heap_lifecycle() {
    let layout = Layout::from_size_align(64, 8).unwrap();

    // Before init the allocator has nothing to hand out.
    assert!(!ALLOCATOR.is_initialized());
    assert!(unsafe { ALLOCATOR.alloc(layout) }.is_null());

    let arena = Box::leak(Box::new(Arena([0; HEAP_SIZE])));
    let bottom = arena.0.as_mut_ptr().expose_provenance();
    unsafe { init_heap(bottom, HEAP_SIZE) };

    assert!(ALLOCATOR.is_initialized());
    assert_eq!(ALLOCATOR.bottom(), bottom);
    assert_eq!(ALLOCATOR.size(), HEAP_SIZE);

    let region = HeapRegion::new(bottom, HEAP_SIZE).unwrap();
    let p = unsafe { ALLOCATOR.alloc(layout) };
    assert!(!p.is_null());
    let start = p.expose_provenance();
    assert!(region.contains(start));
    assert!(start + layout.size() <= region.end());
    assert!(ALLOCATOR.used() >= layout.size());

    unsafe { p.write_bytes(0x5A, layout.size()) };
    unsafe { ALLOCATOR.dealloc(p, layout) };
    assert_eq!(ALLOCATOR.used(), 0);
}
