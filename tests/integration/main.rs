//! Cross-layer integration tests for Wander
//!
//! Tests that verify correct interaction between multiple crates.

mod recovery;
