//! Game Session
//!
//! This demo drives a game session with randomly chosen screen requests.
//!
//! Key concepts:
//! - Exhaustive transition table over a closed state enum
//! - Rejected requests are ordinary outcomes, not errors
//! - Structured logging of every transition
//!
//! Run with: cargo run --example game_session
//! Set RUST_LOG=debug to also see no-op requests.

use keystone::core::{Event, State};
use keystone::game::{new_game_with_config, GameEvent};
use keystone::machine::Outcome;
use keystone::ControllerConfig;
use rand::seq::SliceRandom;

const ROUNDS: usize = 8;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Game Session ===\n");

    let mut game = new_game_with_config(ControllerConfig::default().with_history_limit(32));
    let mut rng = rand::thread_rng();

    for round in 1..=ROUNDS {
        let Some(event) = GameEvent::ALL.choose(&mut rng).copied() else {
            break;
        };

        match game.handle(event) {
            Outcome::Entered { from, to } => {
                println!("[{round}] {}: {} -> {}", event.name(), from.name(), to.name())
            }
            Outcome::Unchanged(state) => {
                println!("[{round}] {}: already on {}", event.name(), state.name())
            }
            Outcome::Rejected { state, .. } => {
                println!("[{round}] {}: not allowed from {}", event.name(), state.name())
            }
        }
    }

    let stats = game.stats();
    println!(
        "\nHandled {} requests: {} moves, {} rejected",
        stats.handled, stats.entered, stats.rejected
    );

    let path: Vec<&str> = game.history().get_path().into_iter().map(|s| s.name()).collect();
    if !path.is_empty() {
        println!("Path: {}", path.join(" -> "));
    }

    match game.checkpoint().to_json() {
        Ok(json) => println!("\nCheckpoint:\n{json}"),
        Err(err) => eprintln!("Checkpoint failed: {err}"),
    }

    println!("\n=== Demo Complete ===");
}
