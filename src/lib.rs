//! draw-poker: single-player five-card draw video poker.
//!
//! - `cards`, `deck`, `hand`: the 52-card model and a player's five slots
//! - `evaluator`: classify five cards into one of ten categories
//! - `round`: the bet → hold → draw → payout state machine and its economy
//! - `tui`: a Ratatui front-end that animates what the core reports
//!
//! The core never blocks and never touches the terminal; it logs through the
//! `log` facade and the binary decides where that goes.
//!
//! ## Quick start: play a round
//! ```
//! use draw_poker::round::{RoundController, RoundState};
//!
//! let mut table = RoundController::with_seed(11);
//! table.place_bet().unwrap();
//! table.reveal_all().unwrap();
//! table.toggle_hold(0).unwrap();
//! let result = table.draw().unwrap();
//! assert_eq!(table.state(), RoundState::RoundResolved);
//! assert_eq!(table.credits(), 90 + result.reward);
//! ```
//!
//! ## Evaluate a hand
//! ```
//! use draw_poker::cards::parse_cards;
//! use draw_poker::evaluator::{evaluate, Category};
//!
//! let cards = parse_cards("2c 2d 5h 5s 9c").unwrap();
//! assert_eq!(evaluate(&cards).unwrap().category, Category::TwoPair);
//! ```
//!
//! ## TUI
//! ```sh
//! cargo run --bin draw-poker -- --seed 7 --log-level debug
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod hand;
pub mod logging;
pub mod paytable;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
