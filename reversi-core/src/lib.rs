//! Reversi core - board types and rules
//!
//! This crate provides the game side of the engine:
//! - Disc, cell and move types for the two-player grid game
//! - The `Board` contract that move-selection code consumes
//! - `GridBoard`, a rectangular board with standard capture rules
//! - The `Agent` interface implemented by move-selecting players

pub mod agent;
pub mod board;

// Re-exports for convenient access
pub use agent::Agent;
pub use board::{Board, BoardError, Cell, Disc, GridBoard, Move};
