//! End-to-end game scenarios.

use ocean_tictactoe::{
    Action, GameEngine, GameStatus, Mark, Position, TerminalResult, WinningLine, evaluate_terminal,
};

fn play(indices: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in indices {
        engine.place_mark_at(index);
    }
    engine
}

#[test]
fn test_top_row_win() {
    let engine = play(&[0, 4, 1, 7, 2]);

    match evaluate_terminal(engine.current_board()) {
        TerminalResult::Win(WinningLine { mark, line }) => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
    assert_eq!(engine.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_classic_draw() {
    let engine = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(engine.current_board().is_full());
    assert_eq!(engine.terminal(), TerminalResult::Draw);
    assert_eq!(engine.status(), GameStatus::Drawn);
    assert_eq!(engine.history().len(), 10);
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut engine = play(&[4]);
    let before = engine.clone();

    engine.place_mark(Position::Center);

    assert_eq!(engine, before);
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.current_move(), 1);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut engine = play(&[0, 4, 1, 7, 2]);
    let before = engine.clone();

    engine.place_mark(Position::BottomRight);

    assert_eq!(engine, before);
}

#[test]
fn test_turns_alternate_from_reset() {
    let mut engine = play(&[0, 1]);
    engine.reset();

    for (k, index) in [4, 0, 8, 2, 6].into_iter().enumerate() {
        let mv = engine.try_place_mark_at(index).expect("cell is free");
        let move_number = k + 1;
        let expected = if move_number % 2 == 1 { Mark::X } else { Mark::O };
        assert_eq!(mv.mark, expected, "move {}", move_number);
    }
}

#[test]
fn test_replay_matches_step_by_step() {
    let actions = [
        Action::PlaceMark(Position::TopLeft),
        Action::PlaceMark(Position::Center),
        Action::JumpTo(1),
        Action::PlaceMark(Position::BottomRight),
        Action::PlaceMark(Position::TopRight),
    ];

    let replayed = GameEngine::replay(&actions);

    let mut stepped = GameEngine::new();
    for action in actions {
        stepped.apply(action);
    }
    assert_eq!(replayed, stepped);
    assert_eq!(replayed.history().len(), 4);
    assert_eq!(replayed.to_move(), Mark::O);
}

#[test]
fn test_reset_action() {
    let mut engine = play(&[0, 4, 8]);
    engine.apply(Action::Reset);
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_actions_serialize() {
    let actions = vec![Action::PlaceMark(Position::Center), Action::JumpTo(0), Action::Reset];
    let json = serde_json::to_string(&actions).expect("serialize");
    let parsed: Vec<Action> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, actions);
}
