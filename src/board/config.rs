//! Board setup configuration

use crate::error::ConfigurationError;

/// Standard board size (8x8)
pub const DEFAULT_SIZE: usize = 8;
/// Starting rows per side on the standard board
pub const DEFAULT_ROWS_OF_PIECES: usize = 3;

/// Dimensions of a board and how many rows each side starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub size: usize,
    pub rows_of_pieces: usize,
}

impl BoardConfig {
    pub fn new(size: usize, rows_of_pieces: usize) -> Self {
        Self {
            size,
            rows_of_pieces,
        }
    }

    /// English draughts: 8x8, three rows each
    pub fn english() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_ROWS_OF_PIECES)
    }

    /// International draughts dimensions: 10x10, four rows each
    pub fn international() -> Self {
        Self::new(10, 4)
    }

    /// Check that both sides' starting rows fit on the board
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.rows_of_pieces > self.size / 2 {
            return Err(ConfigurationError::TooManyRows {
                size: self.size,
                rows_of_pieces: self.rows_of_pieces,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::english()
    }
}
