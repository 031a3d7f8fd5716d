//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use strictly_tictactoe::{Game, GameState, Mark, MoveOutcome, Rejection};

proptest! {
    #[test]
    fn players_alternate_until_terminal(moves in prop::collection::vec(0usize..9, 0..30)) {
        let mut game = Game::new();
        let mut applied = 0usize;
        for index in moves {
            if game.is_over() {
                break;
            }
            let expected = if applied % 2 == 0 { Mark::X } else { Mark::O };
            let before = game.current_player();
            if game.apply_move(index).unwrap().is_applied() {
                prop_assert_eq!(before, expected);
                applied += 1;
            }
        }
    }

    #[test]
    fn repeated_move_is_ignored(moves in prop::collection::vec(0usize..9, 1..12)) {
        let mut game = Game::new();
        for index in moves {
            game.apply_move(index).unwrap();
            let before = game.snapshot();
            let outcome = game.apply_move(index).unwrap();
            prop_assert!(!outcome.is_applied());
            prop_assert_eq!(game.snapshot(), before);
        }
    }

    #[test]
    fn terminal_game_is_locked(moves in prop::collection::vec(0usize..9, 0..40), extra in 0usize..9) {
        let mut game = Game::new();
        for index in moves {
            game.apply_move(index).unwrap();
        }
        if game.is_over() {
            let before = game.snapshot();
            prop_assert_eq!(
                game.apply_move(extra).unwrap(),
                MoveOutcome::Ignored(Rejection::GameOver)
            );
            prop_assert_eq!(game.snapshot(), before);
        }
    }

    #[test]
    fn reset_restores_initial_state(moves in prop::collection::vec(0usize..9, 0..20)) {
        let mut game = Game::new();
        for index in moves {
            game.apply_move(index).unwrap();
        }
        game.reset();
        prop_assert_eq!(game.snapshot(), GameState::new());
    }
}
