use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{find_best_move, sweep, GameState, Grid, Weights};
use blockfall::engine::autoplay_step;
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, PieceKind::I.value());
                }
            }
            sweep(black_box(&mut grid))
        })
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start();
    let mut dir = 1;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !state.move_horizontal(dir) {
                dir = -dir;
            }
        })
    });
}

fn bench_find_best_move(c: &mut Criterion) {
    let mut grid = Grid::default();
    for x in 0..9 {
        for y in 15..20 {
            grid.set(x, y, PieceKind::L.value());
        }
    }
    let weights = Weights::default();

    c.bench_function("find_best_move_t", |b| {
        b.iter(|| find_best_move(black_box(&grid), PieceKind::T, &weights))
    });
}

fn bench_autoplay_step(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    state.start();
    let weights = Weights::default();

    c.bench_function("autoplay_step", |b| {
        b.iter(|| autoplay_step(&mut state, &weights))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_move_horizontal,
    bench_find_best_move,
    bench_autoplay_step
);
criterion_main!(benches);
