//! Core world model for Wander: directions, rooms, and the world graph.
//!
//! This crate provides:
//! - [`Direction`] - The four compass directions and their movement aliases
//! - [`Room`] - A location with exits and an optional on-enter hook
//! - [`World`] - The named room registry and connection builder
//! - [`Error`] - Domain errors shared by every layer
//!
//! Rooms reference each other by name through the [`World`], which owns them
//! all. The [`Visitor`] trait lets on-enter hooks mutate whoever walks in
//! without this crate knowing the player representation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod room;
pub mod world;


// Re-export main types for convenience
pub use direction::Direction;
pub use error::{Error, Result};
pub use room::{EnterHook, Room, Visitor};
pub use world::World;
