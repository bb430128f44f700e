//! Board representation for checkers

pub mod board;
pub mod config;
pub mod position;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{AppliedMove, Board};
pub use config::{BoardConfig, DEFAULT_ROWS_OF_PIECES, DEFAULT_SIZE};
pub use position::{CellColor, Position};

use std::fmt;

/// Player sides
///
/// Side `0` (Black) starts on the first rows of the board, side `1` (White)
/// on the last rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell coordinate on the board, used as the identity of a [`Position`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from signed input, rejecting negative values
    #[inline]
    pub fn from_signed(row: i32, col: i32) -> Option<Self> {
        if row < 0 || col < 0 {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }

    /// Check signed coordinates against a `size` x `size` board
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size
    }

    /// Row-major index on a `size` x `size` board
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// True when `other` is exactly `steps` diagonal steps away
    #[inline]
    pub fn is_diagonal(self, other: Pos, steps: usize) -> bool {
        self.row.abs_diff(other.row) == steps && self.col.abs_diff(other.col) == steps
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A game token owned by one side
///
/// `pos` is a coordinate, not ownership: the [`Board`] holds the authoritative
/// placement. A piece value taken from the board before a capture goes stale
/// once the board removes it, and the board refuses to act on stale pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    side: Side,
    pos: Pos,
}

impl Piece {
    #[inline]
    pub fn new(side: Side, pos: Pos) -> Self {
        Self { side, pos }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub(crate) fn moved_to(self, pos: Pos) -> Self {
        Self { pos, ..self }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} piece at {}", self.side, self.pos)
    }
}
