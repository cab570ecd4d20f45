use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{plan_move, shape_def, try_rotate, Board, Engine};
use blockfall::types::{Input, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            let result = engine.tick();
            if result.game_over {
                engine.apply_input(Input::Restart);
            }
            black_box(result.score)
        })
    });
}

fn bench_soft_drop_cycle(c: &mut Criterion) {
    let mut engine = Engine::new(777);

    c.bench_function("soft_drop_lock_cycle", |b| {
        b.iter(|| {
            engine.apply_input(Input::SoftDropOn);
            engine.tick();
            let result = engine.tick();
            if result.game_over {
                engine.apply_input(Input::Restart);
            }
            black_box(result.lines)
        })
    });
}

fn bench_plan_move(c: &mut Criterion) {
    let board = Board::new();
    let cells = shape_def(PieceKind::T).spawn_cells;

    c.bench_function("plan_move_soft_drop", |b| {
        b.iter(|| black_box(plan_move(&board, black_box(&cells), 0, true)))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let def = shape_def(PieceKind::T);
    let cells = [(5, 3), (5, 4), (5, 5), (4, 4)];

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(try_rotate(&board, def, black_box(cells), 1)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("shift_four_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 14..18i8 {
                for col in 0..10i8 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            for row in 14..18usize {
                if board.is_row_full(row) {
                    board.shift_rows_down(row);
                }
            }
            black_box(board)
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_soft_drop_cycle,
    bench_plan_move,
    bench_try_rotate,
    bench_line_clear
);
criterion_main!(benches);
