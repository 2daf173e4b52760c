use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{Board, Mark, StrategyKind, calculate_minimax_move};

fn bench_self_play_match() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !board.terminal_check().is_terminal() {
        let Some(cell) = calculate_minimax_move(&board, current_mark) else {
            break;
        };
        if board.apply(cell, current_mark).is_err() {
            break;
        }
        current_mark = current_mark.opponent();
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    black_box(calculate_minimax_move(black_box(&board), Mark::X));
}

fn bench_single_move_after_opening() {
    let mut board = Board::new();
    let _ = board.apply(0, Mark::X);
    black_box(calculate_minimax_move(black_box(&board), Mark::O));
}

fn bench_heuristic_move(rng: SessionRng) {
    let board: Board = "X.O\n.X.\n...".parse().unwrap_or_default();
    let mut strategy = StrategyKind::Heuristic.build(rng);
    let _ = black_box(strategy.choose_move(black_box(&board), Mark::O));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("self_play_match", |b| b.iter(bench_self_play_match));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_after_opening", |b| {
        b.iter(bench_single_move_after_opening)
    });

    group.finish();

    c.bench_function("heuristic_single_move", |b| {
        b.iter(|| bench_heuristic_move(SessionRng::new(7)))
    });
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
