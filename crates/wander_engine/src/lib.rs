//! Player, commands, and win conditions for Wander.
//!
//! This crate turns one line of user input into one mutation of the
//! player's state against an immutable world.
//!
//! # Architecture
//!
//! ```text
//! "move up"
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ TOKENIZE         │  → ["move", "up"]
//! └──────────────────┘
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ TABLE LOOKUP     │  → Command { name: "move", params: ["direction"] }
//! └──────────────────┘
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ ARITY CHECK      │  → 1 argument expected, 1 given
//! └──────────────────┘
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ HANDLER          │  → Outcome::Message("You are now in: pub")
//! └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`command`] - Commands, the command table, and dispatch outcomes
//! - [`goal`] - The injected predicate that decides when a session is won
//! - [`player`] - Player state and the dispatch pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod goal;
pub mod player;


// Re-export main types for convenience
pub use command::{Command, CommandContext, CommandFn, CommandTable, Outcome};
pub use goal::WinCondition;
pub use player::{Player, PlayerState};
