//! Wander - Minimal text-adventure engine
//!
//! This crate re-exports all layers of the Wander system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: wander_runtime - Game loop, console, sample games, CLI
//! Layer 1: wander_engine  - Player, command dispatch, win conditions
//! Layer 0: wander_world   - Directions, rooms, the world graph, errors
//! ```

pub use wander_engine as engine;
pub use wander_runtime as runtime;
pub use wander_world as world;
