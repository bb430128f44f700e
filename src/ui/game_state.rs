//! Game state management for the checkers GUI
//!
//! Owns the single [`Board`] of a session and serializes every call into it:
//! whose turn it is, which piece is selected, and when the game is over.

use crate::{AppliedMove, Board, BoardConfig, ConfigurationError, Pos, Side};
use thiserror::Error;

/// Why a session refused a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game is over")]
    GameOver,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("No piece at {0}")]
    NoPieceAt(Pos),
    #[error("Select a piece first")]
    NothingSelected,
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: Pos, to: Pos },
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    pub win_type: WinType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// Every opposing piece was captured
    AllCaptured,
    /// The opponent has pieces left but none of them can move
    Blocked,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub current_turn: Side,
    pub selected: Option<Pos>,
    pub game_over: Option<GameResult>,
    pub last_move: Option<AppliedMove>,
    pub move_count: usize,
    pub message: Option<String>,
}

impl GameState {
    /// Start a session; Black moves first
    pub fn new(config: BoardConfig) -> Result<Self, ConfigurationError> {
        let board = Board::with_config(config)?;
        log::info!(
            "new game on a {}x{} board, {} rows per side",
            config.size,
            config.size,
            config.rows_of_pieces
        );
        Ok(Self {
            board,
            current_turn: Side::Black,
            selected: None,
            game_over: None,
            last_move: None,
            move_count: 0,
            message: None,
        })
    }

    /// Restart with the same configuration
    pub fn reset(&mut self) -> Result<(), ConfigurationError> {
        *self = Self::new(self.board.config())?;
        Ok(())
    }

    /// Legal destinations of the selected piece (highlighted on the board)
    pub fn valid_moves(&self) -> &[Pos] {
        self.board.valid_positions()
    }

    /// Select one of the current side's pieces and compute its destinations
    pub fn select(&mut self, pos: Pos) -> Result<Vec<Pos>, GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }

        let piece = *self.board.get_piece_at_pos(pos).ok_or(GameError::NoPieceAt(pos))?;
        if piece.side() != self.current_turn {
            return Err(GameError::NotYourTurn);
        }

        self.selected = Some(pos);
        Ok(self.board.get_valid_moves(&piece))
    }

    /// Drop the current selection and its highlights
    pub fn deselect(&mut self) {
        self.selected = None;
        self.board.clear_highlights();
    }

    /// Move the selected piece to `destination`
    pub fn try_move(&mut self, destination: Pos) -> Result<AppliedMove, GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }

        let from = self.selected.ok_or(GameError::NothingSelected)?;
        let piece = *self
            .board
            .get_piece_at_pos(from)
            .ok_or(GameError::NoPieceAt(from))?;
        if piece.side() != self.current_turn {
            return Err(GameError::NotYourTurn);
        }

        let applied = self
            .board
            .apply_move(&piece, destination)
            .ok_or(GameError::IllegalMove {
                from,
                to: destination,
            })?;

        self.execute_move(applied);
        Ok(applied)
    }

    /// Interpret a click on the board.
    ///
    /// Clicking one of your own pieces selects it; clicking a destination with
    /// a piece selected moves it there.
    pub fn click(&mut self, pos: Pos) -> Result<(), GameError> {
        let own_piece = self
            .board
            .get_piece_at_pos(pos)
            .is_some_and(|p| p.side() == self.current_turn);

        if own_piece || self.selected.is_none() {
            self.select(pos)?;
        } else {
            self.try_move(pos)?;
        }
        self.message = None;
        Ok(())
    }

    /// Bookkeeping after the board accepted a move
    fn execute_move(&mut self, applied: AppliedMove) {
        let color = self.current_turn;

        self.selected = None;
        self.last_move = Some(applied);
        self.move_count += 1;

        if let Some(captured) = applied.captured {
            log::info!("{} captured {}", color, captured);
        }

        if let Some(result) = self.check_win(color) {
            log::info!("{} wins ({:?})", result.winner, result.win_type);
            self.game_over = Some(result);
            return;
        }

        self.current_turn = color.opponent();
        self.message = None;
    }

    /// Check for win condition after `color` moved
    fn check_win(&self, color: Side) -> Option<GameResult> {
        let opponent = color.opponent();

        if self.board.piece_count(opponent) == 0 {
            return Some(GameResult {
                winner: color,
                win_type: WinType::AllCaptured,
            });
        }

        if !self.board.has_legal_move(opponent) {
            return Some(GameResult {
                winner: color,
                win_type: WinType::Blocked,
            });
        }

        None
    }
}
