//! Move Generation Benchmarks
//!
//! Performance benchmarks for move generation and click handling using Criterion.

use chess_logic::{Board, Color, GameState, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_standard_board(c: &mut Criterion) {
    c.bench_function("standard_board", |b| b.iter(|| black_box(Board::standard())));
}

fn bench_move_generation_starting(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("valid_moves_all_pieces_starting_position", |b| {
        b.iter(|| {
            let total: usize = board
                .pieces()
                .map(|(_, piece)| piece.get_valid_moves(&board).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_queen_open_board(c: &mut Criterion) {
    let mut board = Board::empty();
    let square = Square::new(3, 3).expect("d5 is on the board");
    let id = board
        .place(chess_logic::PieceType::Queen, Color::White, square)
        .expect("empty board");

    c.bench_function("valid_moves_lone_queen", |b| {
        b.iter(|| {
            let queen = board.piece(id).expect("queen on board");
            black_box(queen.get_valid_moves(&board))
        })
    });
}

fn bench_select_and_move(c: &mut Criterion) {
    let from = Square::new(6, 4).expect("e2");
    let to = Square::new(4, 4).expect("e4");

    c.bench_function("click_select_then_commit", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            game.handle_click(from);
            black_box(game.handle_click(to))
        })
    });
}

criterion_group!(
    benches,
    bench_standard_board,
    bench_move_generation_starting,
    bench_queen_open_board,
    bench_select_and_move
);
criterion_main!(benches);
