//! Tests for the headless replay command.

use ocean_tictactoe::{GameStatus, Mark};
use ocean_tictactoe_tui::replay::{render, replay};

#[test]
fn test_replay_win() {
    let view = replay(&[0, 4, 1, 7, 2], None).expect("valid replay");
    assert_eq!(view.status, GameStatus::Won(Mark::X));
    assert_eq!(view.current_move, 5);
}

#[test]
fn test_replay_skips_illegal_moves() {
    let view = replay(&[4, 4, 12, 0], None).expect("valid replay");
    assert_eq!(view.entries.len(), 3);
    assert_eq!(view.to_move, Mark::X);
}

#[test]
fn test_replay_jump() {
    let view = replay(&[0, 4, 1], Some(1)).expect("valid jump");
    assert_eq!(view.current_move, 1);
    assert_eq!(view.entries.len(), 4);
    assert_eq!(view.to_move, Mark::O);
}

#[test]
fn test_replay_jump_out_of_range() {
    let err = replay(&[0], Some(5)).unwrap_err();
    assert!(err.to_string().contains("Cannot jump to move 5"));
}

#[test]
fn test_render_text() {
    let view = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], Some(9)).expect("valid replay");
    let text = render(&view, false).expect("render");
    assert!(text.starts_with("X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X"));
    assert!(text.contains("\nDraw\n"));
    assert!(text.contains("> Go to move #9 (3, 3)"));
    assert!(text.contains("  Go to game start"));
}

#[test]
fn test_render_json() {
    let view = replay(&[4], None).expect("valid replay");
    let text = render(&view, true).expect("render");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(2));
}
