use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_2048::core::{can_move, slide, spawn_tile, Board, GameState, SimpleRng};
use tui_2048::types::Direction;

fn dense_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 4],
        [8, 8, 16, 16],
        [32, 32, 64, 64],
        [128, 128, 256, 256],
    ])
}

fn stuck_board() -> Board {
    Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
}

fn bench_slide(c: &mut Criterion) {
    let board = dense_board();
    c.bench_function("slide_dense_left", |b| {
        b.iter(|| slide(black_box(&board), Direction::Left))
    });
}

fn bench_can_move(c: &mut Criterion) {
    let stuck = stuck_board();
    let open = dense_board();
    c.bench_function("can_move_stuck", |b| b.iter(|| can_move(black_box(&stuck))));
    c.bench_function("can_move_open", |b| b.iter(|| can_move(black_box(&open))));
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("spawn_tile_empty_board", |b| {
        let mut rng = SimpleRng::new(42);
        b.iter(|| {
            let mut board = Board::new();
            spawn_tile(black_box(&mut board), &mut rng)
        })
    });
}

fn bench_full_move_cycle(c: &mut Criterion) {
    c.bench_function("game_state_shift", |b| {
        let mut state = GameState::new(12345);
        let mut i = 0usize;
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            let moved = state.shift(Direction::ALL[i % 4]);
            i += 1;
            black_box(moved)
        })
    });
}

criterion_group!(
    benches,
    bench_slide,
    bench_can_move,
    bench_spawn,
    bench_full_move_cycle
);
criterion_main!(benches);
