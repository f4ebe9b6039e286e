use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::session::{MemoryStore, Session, SessionSnapshot};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameAction};

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

// Both gates live in one test: the counter is process-global and the test
// harness runs tests on parallel threads.
#[test]
fn slide_and_render_paths_do_not_allocate() {
    // Engine: slides, spawns and snapshots.
    let mut gs = GameState::new(4, 1).unwrap();
    gs.start_game();
    let mut snap = GameSnapshot::default();

    // Warm-up, so one-time log callsite registration happens outside the gate.
    for i in 0..64usize {
        let _ = gs.slide(Direction::ALL[i % 4]);
        let _ = gs.slide(Direction::ALL[i % 4]);
    }

    let allocs = with_alloc_counting(|| {
        for i in 0..2_000usize {
            if gs.is_stuck() {
                gs.start_game();
            }
            let _ = gs.slide(Direction::ALL[i % 4]);
            gs.snapshot_into(&mut snap);
        }
    });
    assert_eq!(allocs, 0, "engine slide path allocated");

    // View: rendering into a framebuffer that already has the right size.
    let t0 = Instant::now();
    let mut session = Session::new(GameState::new(4, 2).unwrap(), MemoryStore::new());
    session.apply(GameAction::Confirm, t0);
    for dir in Direction::ALL {
        session.apply(GameAction::Slide(dir), t0);
    }

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut sess_snap = SessionSnapshot::default();

    // Warm-up.
    session.snapshot_into(t0, &mut sess_snap);
    view.render_into(&sess_snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            session.snapshot_into(t0, &mut sess_snap);
            view.render_into(&sess_snap, vp, &mut fb);
        }
    });
    assert_eq!(allocs, 0, "render path allocated");
}
