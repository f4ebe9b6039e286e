use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{Board, GameState, SimpleRng};
use tui_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows(&[
        [2u32, 2, 4, 8],
        [16, 16, 0, 32],
        [4, 0, 4, 64],
        [128, 128, 256, 256],
    ])
    .unwrap_or_default()
}

fn bench_line(c: &mut Criterion) {
    let board = Board::from_rows(&[[2u32, 2], [4, 4]]).unwrap_or_default();

    c.bench_function("slide_2x2_left", |b| {
        b.iter(|| black_box(board).slide(black_box(Direction::Left)))
    });
}

fn bench_board_slide(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("board_slide_all_dirs", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(board.slide(black_box(dir)));
            }
        })
    });
}

fn bench_game_slide(c: &mut Criterion) {
    let mut state = GameState::new(4, 12345).unwrap_or_else(|_| GameState::classic(12345));
    state.start_game();
    let mut i = 0usize;

    c.bench_function("game_slide", |b| {
        b.iter(|| {
            if state.is_stuck() {
                state.start_game();
            }
            i = i.wrapping_add(1);
            black_box(state.slide(Direction::ALL[i % 4]));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let board = Board::default();

    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| {
            let mut state = GameState::with_board(board, SimpleRng::new(7));
            black_box(state.spawn_random_tile());
        })
    });
}

fn bench_check_stuck(c: &mut Criterion) {
    let stuck = Board::from_rows(&[
        [2u32, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
    .unwrap_or_default();
    let state = GameState::with_board(stuck, SimpleRng::new(1));

    c.bench_function("check_stuck_full_board", |b| {
        b.iter(|| black_box(state.check_stuck()))
    });
}

criterion_group!(
    benches,
    bench_line,
    bench_board_slide,
    bench_game_slide,
    bench_spawn,
    bench_check_stuck
);
criterion_main!(benches);
