//! Tests for the tic-tac-toe rules engine.

use minimax_tictactoe::{
    Action, Board, GameStatus, InvalidAction, Mark, Square, apply, current_player, initial_state,
    is_terminal, legal_actions, status, utility, winner,
};

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

#[test]
fn test_initial_state_is_empty() {
    let board = initial_state();
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(legal_actions(&board).len(), 9);
    assert!(!is_terminal(&board));
}

#[test]
fn test_x_moves_first() {
    assert_eq!(current_player(&initial_state()), Mark::X);
}

#[test]
fn test_turns_alternate() {
    let mut board = initial_state();
    for (i, action) in [
        Action::new(1, 1),
        Action::new(0, 0),
        Action::new(2, 2),
        Action::new(0, 2),
    ]
    .into_iter()
    .enumerate()
    {
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(current_player(&board), expected);
        board = apply(&board, action).expect("legal move");
        assert_eq!(board.square(action), Some(Square::Occupied(expected)));
    }
}

#[test]
fn test_apply_does_not_mutate_input() {
    let before = board("X.. .O. ...");
    let snapshot = before;
    let after = apply(&before, Action::new(2, 2)).expect("legal move");
    assert_eq!(before, snapshot);
    assert_ne!(after, before);
    assert_eq!(after.square(Action::new(2, 2)), Some(Square::Occupied(Mark::X)));
}

#[test]
fn test_apply_rejects_occupied_square() {
    let board = board("X.. .O. ...");
    let err = apply(&board, Action::new(1, 1)).unwrap_err();
    assert_eq!(
        err,
        InvalidAction::Occupied {
            action: Action::new(1, 1)
        }
    );
    assert_eq!(err.action(), Action::new(1, 1));
    assert_eq!(
        err.to_string(),
        "Invalid action (1, 1): square is already occupied"
    );
}

#[test]
fn test_apply_rejects_out_of_range() {
    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(usize::MAX, 1)] {
        assert_eq!(
            apply(&initial_state(), action),
            Err(InvalidAction::OutOfRange { action })
        );
    }
}

#[test]
fn test_legal_actions_are_empty_squares() {
    let board = board("XO. .X. ..O");
    let actions = legal_actions(&board);
    assert_eq!(actions.len(), 5);
    assert!(!actions.contains(&Action::new(0, 0)));
    assert!(!actions.contains(&Action::new(1, 1)));
    assert!(actions.contains(&Action::new(0, 2)));
    assert!(actions.iter().all(|a| board.is_empty(*a)));
}

#[test]
fn test_x_top_row_win() {
    // Top row of X with the rest empty.
    let board = board("XXX ... ...");
    assert_eq!(winner(&board), Some(Mark::X));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 1);
}

#[test]
fn test_o_main_diagonal_win() {
    let board = board("OXX XO. ..O");
    assert_eq!(winner(&board), Some(Mark::O));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), -1);
    assert_eq!(status(&board), GameStatus::Won(Mark::O));
}

#[test]
fn test_full_board_draw() {
    let board = board("XOX XOO OXX");
    assert_eq!(winner(&board), None);
    assert!(is_terminal(&board));
    assert!(legal_actions(&board).is_empty());
    assert_eq!(utility(&board), 0);
    assert_eq!(status(&board), GameStatus::Draw);
}

#[test]
fn test_non_terminal_utility_is_zero() {
    let board = board("X.. .O. ...");
    assert!(!is_terminal(&board));
    assert_eq!(utility(&board), 0);
}
