//! Move variants and their legality rules
//!
//! Both variants share one contract: [`Move::evaluate`] takes the board, the
//! moving piece and a candidate cell, and reports whether the move is legal,
//! which piece it would capture and where the piece would land.
//!
//! - `Forward`: the candidate is the destination. Legal when it is on the
//!   board, diagonally adjacent, dark and empty. Any diagonal direction is
//!   allowed for either side.
//! - `Jump`: the candidate is the cell of the piece to capture. Legal when it
//!   holds an opposing piece diagonally adjacent to the mover and the cell one
//!   step beyond it is on the board, dark and empty.

use crate::board::{Board, Piece, Pos};

/// Kind of move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Forward,
    Jump,
}

/// Result of evaluating a candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub kind: Move,
    pub valid: bool,
    /// Piece removed by a legal jump
    pub captured: Option<Piece>,
    /// Cell the piece would end on, if that cell exists on the board
    pub landing: Option<Pos>,
}

impl Move {
    /// Evaluate moving `piece` with `candidate` as the target cell.
    ///
    /// Never fails: off-board, occupied or light targets, and pieces that are
    /// no longer on the board, all give `valid == false`.
    pub fn evaluate(self, board: &Board, piece: &Piece, candidate: Pos) -> MoveOutcome {
        match self {
            Move::Forward => evaluate_forward(board, piece, candidate),
            Move::Jump => evaluate_jump(board, piece, candidate),
        }
    }

    #[inline]
    pub fn is_valid(self, board: &Board, piece: &Piece, candidate: Pos) -> bool {
        self.evaluate(board, piece, candidate).valid
    }
}

fn evaluate_forward(board: &Board, piece: &Piece, destination: Pos) -> MoveOutcome {
    let landing = board.position(destination);
    let valid = board.is_live(piece)
        && piece.pos().is_diagonal(destination, 1)
        && landing.is_some_and(|p| p.is_dark())
        && !board.piece_at_pos(destination);

    MoveOutcome {
        kind: Move::Forward,
        valid,
        captured: None,
        landing: landing.map(|p| p.pos()),
    }
}

fn evaluate_jump(board: &Board, piece: &Piece, candidate: Pos) -> MoveOutcome {
    let target = board
        .get_piece_at_pos(candidate)
        .filter(|t| t.side() != piece.side())
        .copied();
    let landing = board.find_jump_position(piece.pos(), candidate);

    let valid = board.is_live(piece)
        && target.is_some()
        && piece.pos().is_diagonal(candidate, 1)
        && landing.is_some_and(|l| {
            board.position(l).is_some_and(|p| p.is_dark()) && !board.piece_at_pos(l)
        });

    MoveOutcome {
        kind: Move::Jump,
        valid,
        captured: target.filter(|_| valid),
        landing,
    }
}
