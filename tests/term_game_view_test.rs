use std::time::{Duration, Instant};

use tui_2048::core::{Board, GameSnapshot};
use tui_2048::session::{MemoryStore, Overlay, Session, SessionSnapshot};
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_2048::types::{Spawn, Theme};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_string(y));
        all.push('\n');
    }
    all
}

/// `len` characters starting at (`x`, `y`).
fn text_at(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len).filter_map(|cx| fb.get(cx, y)).map(|c| c.ch).collect()
}

fn snap_with(rows: &[[u32; 4]; 4]) -> SessionSnapshot {
    let board = Board::from_rows(rows).unwrap();
    SessionSnapshot {
        game: GameSnapshot::new(board),
        overlay: Overlay::None,
        started: true,
        ..SessionSnapshot::default()
    }
}

#[test]
fn term_view_renders_border_corners() {
    let snap = snap_with(&[[0; 4]; 4]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 4 tiles of 7 columns plus 5 gutters, plus border => 35 wide.
    // 4 tiles of 3 rows plus 5 gutters, plus border => 19 tall.
    let fb = view.render(&snap, Viewport::new(35, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 18).unwrap().ch, '└');
    assert_eq!(fb.get(34, 18).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_values() {
    let snap = snap_with(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2048], [0, 0, 0, 0]]);
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(35, 19));

    // Tile (0,0) spans x 2..9, y 2..5; the digit sits in the middle.
    assert_eq!(fb.get(5, 3).unwrap().ch, '2');
    // Tile (2,3): x = 2 + 3*8 = 26, y = 2 + 2*4 = 10; "2048" starts at 26 + 1.
    assert_eq!(text_at(&fb, 27, 11, 4), "2048");
}

#[test]
fn term_view_highlights_newest_tile() {
    let mut snap = snap_with(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);
    snap.last_spawn = Some(Spawn {
        row: 3,
        col: 3,
        value: 2,
    });
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(35, 19));

    let old = fb.get(5, 3).unwrap();
    let fresh = fb.get(2 + 3 * 8 + 3, 2 + 3 * 4 + 1).unwrap();
    assert_eq!(old.ch, '2');
    assert_eq!(fresh.ch, '2');
    assert!(!old.style.bold);
    assert!(fresh.style.bold);
    assert_eq!(old.style.bg, fresh.style.bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snap_with(&[[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
    snap.game.score = 1234;
    snap.best = 5678;
    snap.moves = 42;
    snap.elapsed = Duration::from_secs(125);
    snap.sound_enabled = false;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);
    for needle in ["SCORE", "1234", "BEST", "5678", "MOVES", "42", "TIME", "2:05", "SOUND off"] {
        assert!(all.contains(needle), "missing {needle:?}\n{all}");
    }
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = snap_with(&[[0; 4]; 4]);
    let fb = GameView::default().render(&snap, Viewport::new(36, 20));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays() {
    let mut snap = snap_with(&[[0; 4]; 4]);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    snap.overlay = Overlay::Paused;
    assert!(screen_text(&view.render(&snap, vp)).contains("PAUSED"));

    snap.overlay = Overlay::WinPrompt;
    assert!(screen_text(&view.render(&snap, vp)).contains("YOU WIN!"));

    snap.overlay = Overlay::GameOver;
    snap.game.score = 3072;
    let text = screen_text(&view.render(&snap, vp));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score 3072"));

    snap.overlay = Overlay::Instructions;
    snap.started = false;
    let text = screen_text(&view.render(&snap, vp));
    assert!(text.contains("HOW TO PLAY"));
    assert!(text.contains("Enter to start"));
}

#[test]
fn term_view_falls_back_to_compact_tiles() {
    let snap = snap_with(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 128]]);
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(31, 11));

    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 10).unwrap().ch, '└');
    // Compact tile (3,3): x = 2 + 3*7 = 23, y = 2 + 3*2 = 8.
    assert_eq!(text_at(&fb, 24, 8, 3), "128");
}

#[test]
fn term_view_themes_change_colors() {
    let mut snap = snap_with(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(35, 19);

    snap.theme = Theme::Light;
    let light = view.render(&snap, vp);
    snap.theme = Theme::Dark;
    let dark = view.render(&snap, vp);

    assert_eq!(light.get(5, 3).unwrap().ch, dark.get(5, 3).unwrap().ch);
    assert_ne!(light.get(5, 3).unwrap().style, dark.get(5, 3).unwrap().style);
}

#[test]
fn term_view_renders_live_session() {
    let t0 = Instant::now();
    let mut session = Session::new(tui_2048::core::GameState::classic(8), MemoryStore::new());
    let view = GameView::default();

    let fb = view.render(&session.snapshot(t0), Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("HOW TO PLAY"));

    session.apply(tui_2048::types::GameAction::Confirm, t0);
    let snap = session.snapshot(t0);
    let fb = view.render(&snap, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(!text.contains("HOW TO PLAY"));
    assert!(text.contains("0:00"));
}
