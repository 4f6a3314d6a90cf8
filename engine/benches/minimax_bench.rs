use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;
use tictactoe_engine::{Board, GameStatus, Mark, evaluate, select_move};

fn bench_select_move_empty_board() {
    let board = Board::new();
    select_move(&board, Mark::O);
}

fn bench_select_move_mid_game() {
    let mut board = Board::new();
    for (index, mark) in [(0, Mark::X), (4, Mark::O), (1, Mark::X), (2, Mark::O)] {
        board.place(index, mark);
    }
    select_move(&board, Mark::X);
}

fn bench_self_play_full_game() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    while evaluate(&board) == GameStatus::InProgress {
        let chosen = select_move(&board, mark);
        let Some(index) = chosen.index else {
            break;
        };
        board.place(index, mark);
        mark = mark.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("select_move_empty_board", |b| {
        b.iter(bench_select_move_empty_board)
    });

    group.bench_function("select_move_mid_game", |b| {
        b.iter(bench_select_move_mid_game)
    });

    group.bench_function("self_play_full_game", |b| {
        b.iter(bench_self_play_full_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
