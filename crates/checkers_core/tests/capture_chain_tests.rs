//! Tests for multi-jump capture chains
//!
//! The search follows one frontier and does not explore every branch; the
//! tests below pin both the chains it finds and the ones it misses.

use checkers_core::{find_capture_chain, Board, PieceKind, Position, Side};

fn pos(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

/// First-side piece on (3,0) with a jump available in both directions.
/// The left branch continues over (2,3) to (3,4); the right branch continues
/// over (6,3) to (7,4).
fn forked() -> Board {
    Board::from_diagram(
        "
        ........
        ........
        ........
        ........
        ..o...o.
        ........
        ..o.o...
        ...x....
        ",
    )
    .unwrap()
}

// =============================================================================
// Chains that are found
// =============================================================================

#[test]
fn test_double_jump_commit() {
    let mut board = Board::from_diagram(
        "
        ........
        ........
        ........
        ........
        ....o...
        ........
        ..o.....
        .x......
        ",
    )
    .unwrap();
    assert!(board.try_move(pos(1, 0), pos(5, 4), true));
    assert_eq!(board.piece_at(pos(2, 1)), PieceKind::Empty);
    assert_eq!(board.piece_at(pos(4, 3)), PieceKind::Empty);
    assert_eq!(board.piece_at(pos(1, 0)), PieceKind::Empty);
    assert_eq!(board.piece_at(pos(5, 4)), PieceKind::FirstSide);
    assert_eq!(board.count(Side::Second), 0);
}

#[test]
fn test_intermediate_landing_is_also_reachable() {
    let board = Board::from_diagram(
        "
        ........
        ........
        ........
        ........
        ....o...
        ........
        ..o.....
        .x......
        ",
    )
    .unwrap();
    let chain = find_capture_chain(&board, pos(1, 0), pos(3, 2)).unwrap();
    assert_eq!(chain.captured(), vec![pos(2, 1)]);
    assert!(board.is_legal(pos(1, 0), pos(3, 2)));
}

#[test]
fn test_chain_links_back_to_origin() {
    let board = forked();
    let chain = find_capture_chain(&board, pos(3, 0), pos(7, 4)).unwrap();

    assert_eq!(chain.origin(), pos(3, 0));
    assert_eq!(chain.destination(), pos(7, 4));
    // Both first jumps were discovered, only the right one is on the path
    assert_eq!(chain.discovered().len(), 3);
    let path: Vec<_> = chain.path().map(|s| (s.from, s.to)).collect();
    assert_eq!(path, vec![(pos(5, 2), pos(7, 4)), (pos(3, 0), pos(5, 2))]);
    assert_eq!(chain.captured(), vec![pos(6, 3), pos(4, 1)]);
}

#[test]
fn test_commit_removes_only_path_captures() {
    let mut board = forked();
    assert!(board.try_move(pos(3, 0), pos(7, 4), true));
    // The left branch piece survives
    assert_eq!(board.piece_at(pos(2, 1)), PieceKind::SecondSide);
    assert_eq!(board.piece_at(pos(2, 3)), PieceKind::SecondSide);
    assert_eq!(board.piece_at(pos(4, 1)), PieceKind::Empty);
    assert_eq!(board.piece_at(pos(6, 3)), PieceKind::Empty);
    assert_eq!(board.count(Side::Second), 2);
}

#[test]
fn test_first_jump_of_either_branch_is_legal() {
    let board = forked();
    assert!(board.is_legal(pos(3, 0), pos(1, 2)));
    assert!(board.is_legal(pos(3, 0), pos(5, 2)));
}

// =============================================================================
// Frontier-following limitation
// =============================================================================

#[test]
fn test_left_branch_continuation_is_not_explored() {
    // (3,0) -> (1,2) -> (3,4) is a real double jump, but the search follows
    // the right branch, which was discovered last, and never returns.
    let board = forked();
    assert!(find_capture_chain(&board, pos(3, 0), pos(3, 4)).is_none());
    assert!(!board.is_legal(pos(3, 0), pos(3, 4)));
}

#[test]
fn test_search_never_mutates() {
    let board = forked();
    let snapshot = board.clone();
    for to in Position::all() {
        let _ = find_capture_chain(&board, pos(3, 0), to);
    }
    assert_eq!(board, snapshot);
}
