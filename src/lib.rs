//! Checkers rules engine
//!
//! Board geometry, piece placement and move legality for checkers
//! (draughts), plus a small session layer that alternates turns:
//! - N x N board, configurable number of starting rows per side
//! - Pieces only ever stand on dark cells
//! - Forward moves: one diagonal step onto an empty dark cell
//! - Jumps: over an adjacent opposing piece onto the empty cell beyond it
//!
//! # Architecture
//!
//! - [`board`]: Cells, pieces, legal destinations and capture counters
//! - [`rules`]: Move variants and move execution
//! - [`ui`]: Game session and the egui front end
//!
//! # Quick Start
//!
//! ```
//! use checkers::{Board, Pos, Side};
//!
//! let mut board = Board::new(8, 3).unwrap();
//! assert_eq!(board.piece_count(Side::Black), 12);
//!
//! let piece = *board.get_piece_at(2, 1).unwrap();
//! let destinations = board.get_valid_moves(&piece);
//! assert_eq!(destinations, vec![Pos::new(3, 0), Pos::new(3, 2)]);
//!
//! let applied = board.apply_move(&piece, Pos::new(3, 2)).unwrap();
//! assert!(applied.captured.is_none());
//! assert!(board.piece_at(3, 2));
//! ```
//!
//! Illegal moves are ordinary results, not errors:
//!
//! ```
//! use checkers::{Board, Pos};
//!
//! let mut board = Board::new(8, 3).unwrap();
//! let piece = *board.get_piece_at(0, 1).unwrap();
//! assert!(board.get_valid_moves(&piece).is_empty());
//! assert!(board.apply_move(&piece, Pos::new(1, 0)).is_none());
//! assert!(Board::new(8, 5).is_err());
//! ```

pub mod board;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{
    AppliedMove, Board, BoardConfig, CellColor, Piece, Pos, Position, Side,
    DEFAULT_ROWS_OF_PIECES, DEFAULT_SIZE,
};
pub use error::ConfigurationError;
pub use rules::{Move, MoveOutcome};
