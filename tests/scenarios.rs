//! End-to-end scenarios for the game controller and the registry.

use keystone::game::{new_game, Game, GameEvent, GameRules, GameState};
use keystone::machine::{Outcome, Rule, TransitionTable};
use keystone::registry::SharedInstanceRegistry;
use keystone::{ControllerBuilder, RuleTableBuilder, State};
use std::cell::Cell;
use std::sync::Arc;

#[test]
fn game_session_walkthrough() {
    let mut game = new_game();
    assert_eq!(game.current_state(), &GameState::Welcome);

    let steps = [
        (GameEvent::ToPlaying, GameState::Playing, false),
        (GameEvent::ToBreak, GameState::Break, false),
        (GameEvent::ToEnd, GameState::Break, true),
        (GameEvent::ToPlaying, GameState::Playing, false),
        (GameEvent::ToEnd, GameState::Ended, false),
        (GameEvent::ToWelcome, GameState::Welcome, false),
    ];

    for (event, expected, rejected) in steps {
        let outcome = game.handle(event);
        assert_eq!(outcome.is_rejected(), rejected, "{:?}", event);
        assert_eq!(game.current_state(), &expected);
    }

    let path: Vec<&str> = game
        .history()
        .get_path()
        .into_iter()
        .map(|state| state.name())
        .collect();
    assert_eq!(
        path,
        vec!["Welcome", "Playing", "Break", "Playing", "Ended", "Welcome"]
    );
}

#[test]
fn every_unlisted_pair_is_rejected_without_moving() {
    for &state in GameState::ALL {
        for &event in GameEvent::ALL {
            if GameRules.resolve(&state, &event) != Rule::Reject {
                continue;
            }
            let mut game = Game::new(state, GameRules);
            assert_eq!(
                game.handle(event),
                Outcome::Rejected { state, event },
                "{} / {:?}",
                state.name(),
                event
            );
            assert_eq!(game.current_state(), &state);
        }
    }
}

#[test]
fn rule_table_matches_hand_written_table() {
    let table = RuleTableBuilder::new()
        .allow(GameState::Welcome, GameEvent::ToPlaying, GameState::Playing)
        .allow(GameState::Playing, GameEvent::ToBreak, GameState::Break)
        .allow(GameState::Playing, GameEvent::ToEnd, GameState::Ended)
        .allow(GameState::Break, GameEvent::ToPlaying, GameState::Playing)
        .allow(GameState::Ended, GameEvent::ToWelcome, GameState::Welcome)
        .stay(GameState::Welcome, GameEvent::ToWelcome)
        .stay(GameState::Playing, GameEvent::ToPlaying)
        .stay(GameState::Break, GameEvent::ToBreak)
        .stay(GameState::Ended, GameEvent::ToEnd)
        .build()
        .unwrap();

    for state in GameState::ALL {
        for event in GameEvent::ALL {
            assert_eq!(table.resolve(state, event), GameRules.resolve(state, event));
        }
    }

    let mut controller = ControllerBuilder::new()
        .initial(GameState::Welcome)
        .table(table)
        .build()
        .unwrap();
    assert!(controller.handle(GameEvent::ToPlaying).is_entered());
}

struct Connection {
    dsn: &'static str,
}

#[test]
fn registry_constructs_once_then_reuses() {
    let registry = SharedInstanceRegistry::new();
    let calls = Cell::new(0);

    let first = registry.get_or_init(|| {
        calls.set(calls.get() + 1);
        Connection { dsn: "db://x" }
    });
    assert_eq!(calls.get(), 1);

    let second = registry.get_or_init(|| {
        calls.set(calls.get() + 1);
        Connection { dsn: "db://y" }
    });

    assert_eq!(calls.get(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.dsn, "db://x");
}
