//! Interactive runtime for Wander.
//!
//! Wires a [`wander_engine::Player`] to a console: rustyline when a human
//! is typing, a scripted console in tests and benchmarks. Also ships the
//! demo worlds the `wander` binary plays.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod demo;
pub mod game;

pub use console::{GameConsole, ReadEvent, RustylineConsole, ScriptedConsole};
pub use demo::{campus_player, campus_world, tour_player, tour_world};
pub use game::{Game, WINNING_MESSAGE};
