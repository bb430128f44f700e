//! Move rules for checkers
//!
//! This module implements the rule set:
//! - Move legality for forward steps and capturing jumps
//! - Move execution (relocation, capture removal, capture counting)

pub mod capture;
pub mod moves;

// Re-exports for convenient access
pub use capture::{classify_move, execute_move};
pub use moves::{Move, MoveOutcome};
