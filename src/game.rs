//! Game session controller.
//!
//! Four screens (Welcome, Playing, Break, Ended) and one event per screen.
//! The permitted moves are:
//!
//! | From \ Event | ToWelcome | ToPlaying | ToBreak | ToEnd  |
//! |--------------|-----------|-----------|---------|--------|
//! | Welcome      | stay      | Playing   | reject  | reject |
//! | Playing      | reject    | stay      | Break   | Ended  |
//! | Break        | reject    | Playing   | stay    | reject |
//! | Ended        | Welcome   | reject    | reject  | stay   |
//!
//! Ended + ToWelcome returns to the welcome screen. The original game moved
//! straight to Playing on this event instead.

use crate::config::ControllerConfig;
use crate::machine::{Rule, StateController, TransitionTable};
use crate::{event_enum, state_enum};

state_enum! {
    /// Screen a game session is on.
    pub enum GameState {
        Welcome,
        Playing,
        Break,
        Ended,
    }
}

event_enum! {
    /// Request to move a game session to another screen.
    pub enum GameEvent {
        ToWelcome,
        ToPlaying,
        ToBreak,
        ToEnd,
    }
}

impl GameEvent {
    /// The screen this event asks for.
    pub fn target(&self) -> GameState {
        match self {
            Self::ToWelcome => GameState::Welcome,
            Self::ToPlaying => GameState::Playing,
            Self::ToBreak => GameState::Break,
            Self::ToEnd => GameState::Ended,
        }
    }
}

/// Transition table for game sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameRules;

impl TransitionTable<GameState, GameEvent> for GameRules {
    fn resolve(&self, from: &GameState, event: &GameEvent) -> Rule<GameState> {
        use GameEvent::*;
        use GameState::*;

        match (from, event) {
            (Welcome, ToWelcome) => Rule::Stay,
            (Welcome, ToPlaying) => Rule::Enter(Playing),
            (Welcome, ToBreak) => Rule::Reject,
            (Welcome, ToEnd) => Rule::Reject,

            (Playing, ToWelcome) => Rule::Reject,
            (Playing, ToPlaying) => Rule::Stay,
            (Playing, ToBreak) => Rule::Enter(Break),
            (Playing, ToEnd) => Rule::Enter(Ended),

            (Break, ToWelcome) => Rule::Reject,
            (Break, ToPlaying) => Rule::Enter(Playing),
            (Break, ToBreak) => Rule::Stay,
            (Break, ToEnd) => Rule::Reject,

            (Ended, ToWelcome) => Rule::Enter(Welcome),
            (Ended, ToPlaying) => Rule::Reject,
            (Ended, ToBreak) => Rule::Reject,
            (Ended, ToEnd) => Rule::Stay,
        }
    }
}

/// A game session, starting on the welcome screen.
pub type Game = StateController<GameState, GameEvent, GameRules>;

/// Start a new session on the welcome screen.
pub fn new_game() -> Game {
    StateController::new(GameState::Welcome, GameRules)
}

pub fn new_game_with_config(config: ControllerConfig) -> Game {
    StateController::with_config(GameState::Welcome, GameRules, config)
}
