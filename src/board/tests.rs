use common::cell::*;
use common::Direction;
use crate::reversi_position;

use super::*;

fn snapshot(board: &Board) -> Vec<CellState> {
    Cell::all().map(|cell| board.get(cell)).collect()
}

#[test]
fn test_starting_position() {
    let board = Board::starting_position();
    assert_eq!(4, board.occupied_count());
    assert_eq!(60, board.empty_count());
    assert_eq!(CellState::White, board.get(D4));
    assert_eq!(CellState::Black, board.get(E4));
    assert_eq!(CellState::Black, board.get(D5));
    assert_eq!(CellState::White, board.get(E5));
    assert_eq!(2, board.count(Side::Black));
    assert_eq!(2, board.count(Side::White));
}

#[test]
fn test_white_captures_vertical_run_from_e3() {
    let mut board = Board::starting_position();

    let captured = board.probe_or_apply(E3, Side::White, CaptureMode::Apply);

    assert_eq!(1, captured);
    assert_eq!(CellState::White, board.get(E3));
    assert_eq!(CellState::White, board.get(E4));
    assert_eq!(CellState::White, board.get(E5));
    assert_eq!(4, board.count(Side::White));
    assert_eq!(1, board.count(Side::Black));
}

#[test]
fn test_probe_does_not_mutate() {
    let mut board = Board::starting_position();
    let before = board;

    assert_eq!(1, board.probe_or_apply(E3, Side::White, CaptureMode::Probe));
    assert_eq!(before, board);
}

#[test]
fn test_probe_short_circuits_to_one() {
    // Black on b4 captures along two directions, but probe only reports 1.
    let mut board = reversi_position! {
        ........
        ........
        ........
        ..WWB...
        ..W.....
        ...B....
        ........
        ........
    };
    let probe = board.probe_or_apply(B4, Side::Black, CaptureMode::Probe);
    assert_eq!(1, probe);

    let applied = board.probe_or_apply(B4, Side::Black, CaptureMode::Apply);
    assert_eq!(3, applied);
    assert_eq!(CellState::Black, board.get(B4));
    assert_eq!(CellState::Black, board.get(C4));
    assert_eq!(CellState::Black, board.get(D4));
    assert_eq!(CellState::Black, board.get(C5));
}

#[test]
fn test_occupied_cell_is_a_no_op() {
    let mut board = Board::starting_position();
    let before = snapshot(&board);

    assert_eq!(0, board.probe_or_apply(D4, Side::Black, CaptureMode::Apply));
    assert_eq!(0, board.probe_or_apply(D4, Side::Black, CaptureMode::Probe));
    assert_eq!(before, snapshot(&board));
}

#[test]
fn test_non_capturing_cell_stays_empty() {
    let mut board = Board::starting_position();
    let before = snapshot(&board);

    // Adjacent to an opponent piece but nothing is bracketed.
    assert!(board.adjacent_opponent(F3, Side::White));
    assert_eq!(0, board.probe_or_apply(F3, Side::White, CaptureMode::Apply));
    assert_eq!(CellState::Empty, board.get(F3));

    // Not adjacent to anything.
    assert_eq!(0, board.probe_or_apply(A1, Side::White, CaptureMode::Apply));
    assert_eq!(before, snapshot(&board));
}

#[test]
fn test_run_ending_at_edge_is_discarded() {
    let mut board = reversi_position! {
        ........
        ........
        ........
        ....W.BB
        ........
        ........
        ........
        ........
    };
    // Walking east from f4 reaches the board edge without a white piece.
    assert!(board.adjacent_opponent(F4, Side::White));
    assert!(!board.probe(F4, Side::White));
    assert_eq!(0, board.apply(F4, Side::White));
    assert_eq!(CellState::Empty, board.get(F4));

    let mut board = reversi_position! {
        ........
        ........
        ........
        ....BBW.
        ........
        ........
        ........
        ........
    };
    assert_eq!(2, board.apply(D4, Side::White));
    assert_eq!(4, board.count(Side::White));
}

#[test]
fn test_run_does_not_wrap_across_rows() {
    // h3 is black and a4 is white. Index-wise a4 follows h3, but a run east from f3
    // must stop at the edge instead of wrapping onto row 4.
    let mut board = reversi_position! {
        ........
        ........
        ......BB
        W.......
        ........
        ........
        ........
        ........
    };
    assert!(!board.probe(F3, Side::White));
    assert_eq!(0, board.apply(F3, Side::White));
    assert_eq!(CellState::Black, board.get(G3));

    // South-west from b3 passes a4; one more step would wrap to h4 without the
    // column guard.
    let mut board = reversi_position! {
        ........
        ........
        ........
        B......W
        ........
        ........
        ........
        ........
    };
    assert!(!board.probe(B3, Side::White));
    assert_eq!(0, board.apply(B3, Side::White));
}

#[test]
fn test_scan_from_edge_columns_stays_on_row() {
    // Every ray from an edge column moves at most one row and one column per step.
    for origin in Cell::all().filter(|cell| cell.col() == 0 || cell.col() == 7) {
        for &direction in Direction::ALL.iter() {
            let mut previous = origin;
            for cell in direction.ray(origin) {
                let col_delta = (cell.col() as i8 - previous.col() as i8).abs();
                let row_delta = (cell.row() as i8 - previous.row() as i8).abs();
                assert!(col_delta <= 1 && row_delta <= 1, "{:?} from {}", direction, origin);
                previous = cell;
            }
        }
    }
}

#[test]
fn test_capture_conservation() {
    let mut board = reversi_position! {
        ........
        ........
        ..B.....
        ...WW...
        ..BWB...
        ........
        ........
        ........
    };
    let black_before = board.count(Side::Black);
    let white_before = board.count(Side::White);
    let occupied_before = board.occupied_count();

    let captured = board.apply(E3, Side::Black);

    assert_eq!(2, captured);
    assert_eq!(black_before + captured + 1, board.count(Side::Black));
    assert_eq!(white_before - captured, board.count(Side::White));
    assert_eq!(occupied_before + 1, board.occupied_count());
}

#[test]
fn test_adjacent_opponent() {
    let board = Board::starting_position();
    assert!(board.adjacent_opponent(C3, Side::Black));
    assert!(board.adjacent_opponent(F6, Side::Black));
    assert!(!board.adjacent_opponent(A1, Side::Black));
    assert!(!board.adjacent_opponent(B2, Side::White));
}

#[test]
fn test_has_legal_move() {
    let board = Board::starting_position();
    assert!(board.has_legal_move(Side::White));
    assert!(board.has_legal_move(Side::Black));
    assert!(!board.is_game_over());
}

#[test]
fn test_game_over_when_nobody_can_move() {
    // The lone white piece is off every line through h8.
    let board = reversi_position! {
        BWBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBB.
    };
    assert!(!board.has_legal_move(Side::Black));
    assert!(!board.has_legal_move(Side::White));
    assert!(board.is_game_over());
}

#[test]
fn test_not_game_over_when_one_side_can_move() {
    let board = reversi_position! {
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBBB
        BBBBBBWW
        BBBBBB..
    };
    assert!(board.has_legal_move(Side::Black));
    assert!(!board.has_legal_move(Side::White));
    assert!(!board.is_game_over());
}

#[test]
fn test_to_ascii() {
    let board = Board::starting_position();
    let ascii = board.to_ascii();
    let lines: Vec<&str> = ascii.lines().collect();
    assert_eq!("  a b c d e f g h", lines[0]);
    assert_eq!("4 . . . W B . . .", lines[4]);
    assert_eq!("5 . . . B W . . .", lines[5]);
}
