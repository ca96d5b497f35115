//! Tests for headless tic-tac-toe replay.

use strictly_demos::replay_report;
use strictly_demos::tictactoe::{MoveError, Position};

#[test]
fn test_winning_replay_report() {
    let report = replay_report(&[0, 3, 1, 4, 2]).unwrap();
    assert_eq!(report, "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nPlayer X wins");
}

#[test]
fn test_unfinished_replay_names_next_player() {
    let report = replay_report(&[4]).unwrap();
    assert!(report.ends_with("In progress (O to move)"));
}

#[test]
fn test_draw_replay_report() {
    let report = replay_report(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
    assert!(report.ends_with("\n\nDraw"));
}

#[test]
fn test_rejected_replay() {
    assert_eq!(
        replay_report(&[4, 4]),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(replay_report(&[0, 3, 1, 4, 2, 5]), Err(MoveError::GameOver));
}
