use sos::{sequences_through, Board, Letter, Sequence};

fn ends(seq: &Sequence) -> [(usize, usize); 2] {
    let mut pair = [seq.start, seq.end];
    pair.sort();
    pair
}

fn assert_runs(found: &[Sequence], expected: &[[(usize, usize); 2]]) {
    let mut got: Vec<_> = found.iter().map(ends).collect();
    got.sort();
    let mut want = expected.to_vec();
    want.sort();
    assert_eq!(got, want);
}

#[test]
fn test_detects_run_from_trailing_s() {
    let mut board = Board::new(3).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    board.set(0, 1, Letter::O).unwrap();
    board.set(0, 2, Letter::S).unwrap();
    let found = sequences_through(&board, 0, 2);
    assert_runs(&found, &[[(0, 0), (0, 2)]]);
}

#[test]
fn test_detects_run_from_leading_s() {
    let mut board = Board::new(3).unwrap();
    board.set(0, 1, Letter::O).unwrap();
    board.set(0, 2, Letter::S).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    let found = sequences_through(&board, 0, 0);
    assert_runs(&found, &[[(0, 0), (0, 2)]]);
}

#[test]
fn test_detects_run_from_middle_o() {
    let mut board = Board::new(3).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    board.set(0, 2, Letter::S).unwrap();
    board.set(0, 1, Letter::O).unwrap();
    let found = sequences_through(&board, 0, 1);
    assert_runs(&found, &[[(0, 0), (0, 2)]]);
}

#[test]
fn test_detects_vertical_and_diagonal_runs() {
    let mut board = Board::new(4).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    board.set(1, 0, Letter::O).unwrap();
    board.set(2, 0, Letter::S).unwrap();
    assert_runs(&sequences_through(&board, 2, 0), &[[(0, 0), (2, 0)]]);

    let mut board = Board::new(4).unwrap();
    board.set(1, 1, Letter::S).unwrap();
    board.set(2, 2, Letter::O).unwrap();
    board.set(3, 3, Letter::S).unwrap();
    assert_runs(&sequences_through(&board, 3, 3), &[[(1, 1), (3, 3)]]);

    let mut board = Board::new(4).unwrap();
    board.set(3, 0, Letter::S).unwrap();
    board.set(2, 1, Letter::O).unwrap();
    board.set(1, 2, Letter::S).unwrap();
    assert_runs(&sequences_through(&board, 1, 2), &[[(1, 2), (3, 0)]]);
}

#[test]
fn test_wrong_patterns_yield_nothing() {
    // S S O is not a run
    let mut board = Board::new(3).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    board.set(0, 1, Letter::S).unwrap();
    board.set(0, 2, Letter::O).unwrap();
    assert!(sequences_through(&board, 0, 2).is_empty());
    assert!(sequences_through(&board, 0, 1).is_empty());

    // O O O is not a run
    let mut board = Board::new(3).unwrap();
    board.set(1, 0, Letter::O).unwrap();
    board.set(1, 1, Letter::O).unwrap();
    board.set(1, 2, Letter::O).unwrap();
    assert!(sequences_through(&board, 1, 1).is_empty());
}

#[test]
fn test_middle_s_of_sosos_completes_two_runs() {
    // S O _ O S on row 2, then the middle S lands
    let mut board = Board::new(5).unwrap();
    board.set(2, 0, Letter::S).unwrap();
    board.set(2, 1, Letter::O).unwrap();
    board.set(2, 3, Letter::O).unwrap();
    board.set(2, 4, Letter::S).unwrap();
    board.set(2, 2, Letter::S).unwrap();
    let found = sequences_through(&board, 2, 2);
    assert_runs(&found, &[[(2, 0), (2, 2)], [(2, 2), (2, 4)]]);
}

#[test]
fn test_single_run_reported_once() {
    // the same physical run is visible from both direction senses; the
    // detector must still report it a single time
    let mut board = Board::new(3).unwrap();
    board.set(1, 0, Letter::S).unwrap();
    board.set(1, 2, Letter::S).unwrap();
    board.set(1, 1, Letter::O).unwrap();
    assert_eq!(sequences_through(&board, 1, 1).len(), 1);

    let mut board = Board::new(3).unwrap();
    board.set(1, 0, Letter::S).unwrap();
    board.set(1, 1, Letter::O).unwrap();
    board.set(1, 2, Letter::S).unwrap();
    assert_eq!(sequences_through(&board, 1, 2).len(), 1);
}

#[test]
fn test_crossing_runs_through_one_o() {
    // four S pairs around the center; the O completes four crossing runs
    let mut board = Board::new(3).unwrap();
    for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
        board.set(r, c, Letter::S).unwrap();
    }
    board.set(1, 1, Letter::O).unwrap();
    let found = sequences_through(&board, 1, 1);
    assert_runs(
        &found,
        &[
            [(0, 0), (2, 2)],
            [(0, 1), (2, 1)],
            [(0, 2), (2, 0)],
            [(1, 0), (1, 2)],
        ],
    );
}

#[test]
fn test_patterns_off_board_are_skipped() {
    // a lone corner S has every pattern at least partly off-board
    let mut board = Board::new(3).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    assert!(sequences_through(&board, 0, 0).is_empty());

    // run would continue past the edge; nothing to report
    let mut board = Board::new(3).unwrap();
    board.set(0, 1, Letter::O).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    assert!(sequences_through(&board, 0, 0).is_empty());
}

#[test]
fn test_empty_or_invalid_cell_yields_nothing() {
    let board = Board::new(3).unwrap();
    assert!(sequences_through(&board, 1, 1).is_empty());
    assert!(sequences_through(&board, 9, 9).is_empty());
}

#[test]
fn test_detection_does_not_mutate_board() {
    let mut board = Board::new(3).unwrap();
    board.set(0, 0, Letter::S).unwrap();
    board.set(0, 1, Letter::O).unwrap();
    board.set(0, 2, Letter::S).unwrap();
    let before = board.clone();
    let _ = sequences_through(&board, 0, 2);
    assert_eq!(board, before);
}
