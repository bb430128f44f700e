//! Error types for board construction

use thiserror::Error;

/// Raised when a board cannot be set up with the requested dimensions.
///
/// This is the only failure the core reports. Illegal moves are ordinary
/// negative results (`valid == false`, empty sets, `None`), never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Both sides' starting rows do not fit on the board (`2 * rows > size`)
    #[error("{rows_of_pieces} rows of pieces per side do not fit on a {size}x{size} board")]
    TooManyRows { size: usize, rows_of_pieces: usize },
}
