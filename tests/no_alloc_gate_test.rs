use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pixel_snake::core::GameSnapshot;
use pixel_snake::engine::Engine;
use pixel_snake::term::{FrameBuffer, HudState, PixelView, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is process-wide.
#[test]
fn hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut engine = Engine::new();
    engine.initialize();
    let mut snapshot = GameSnapshot::default();

    let view = PixelView::default();
    let viewport = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let hud = HudState::default();

    // Warm-up: hit every logging callsite once (ignored codes, eating, game over).
    engine.set_direction_code(7);
    engine.set_direction_code(3);
    engine.set_direction_code(0);
    let _ = engine.update();
    let _ = engine.update();
    engine.set_direction_code(1);
    while engine.update() {}
    engine.initialize();
    let _ = engine.update();
    engine.draw_grid();
    engine.game().snapshot_into(&mut snapshot);
    view.render_into(engine.pixels(), &hud, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        // Wander in a fixed pattern; restart whenever the game ends.
        let codes = [0u32, 1, 1, 2, 2, 3, 3, 3, 0, 7];
        for i in 0..500 {
            engine.set_direction_code(codes[i % codes.len()]);
            if !engine.update() {
                engine.initialize();
            }
            engine.draw_grid();
            engine.game().snapshot_into(&mut snapshot);
        }

        for _ in 0..20 {
            view.render_into(engine.pixels(), &hud, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
