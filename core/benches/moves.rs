use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use twenty48_core::*;

fn midgame_board() -> Board {
    let mut engine = PlayEngine::with_seed(2048);
    for direction in Direction::ALL.iter().cycle().take(120) {
        engine.make_move(*direction);
    }
    engine.board().clone()
}

fn bench_shift(c: &mut Criterion) {
    let board = midgame_board();
    let mut group = c.benchmark_group("shift");
    for direction in Direction::ALL {
        group.bench_function(direction.as_str(), |b| {
            b.iter(|| black_box(&board).shifted(black_box(direction)))
        });
    }
    group.finish();
}

fn bench_game_over_check(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("is_stuck", |b| b.iter(|| black_box(&board).is_stuck()));
    c.bench_function("full_without_pairs", |b| {
        b.iter(|| {
            let board = black_box(&board);
            board.is_full() && !board.has_adjacent_pair()
        })
    });
}

fn bench_make_move(c: &mut Criterion) {
    c.bench_function("make_move", |b| {
        b.iter_batched(
            || PlayEngine::with_seed(7),
            |mut engine| {
                for direction in Direction::ALL {
                    engine.make_move(direction);
                }
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_shift, bench_game_over_check, bench_make_move);
criterion_main!(benches);
