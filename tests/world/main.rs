//! Integration tests for Layer 0: World
//!
//! Tests for directions, rooms, and the world graph.
