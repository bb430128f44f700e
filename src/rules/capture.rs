//! Move execution and jump captures
//!
//! A destination one diagonal step away is a forward move; two steps away is
//! a jump over whatever piece sits on the midpoint. Anything else is never
//! legal. A jump removes the captured piece and counts it against its side.

use crate::board::{AppliedMove, Board, Piece, Pos};

use super::moves::{Move, MoveOutcome};

/// Work out which move takes `piece` to `destination`, if any is legal.
pub fn classify_move(board: &Board, piece: &Piece, destination: Pos) -> Option<MoveOutcome> {
    let from = piece.pos();

    if from.is_diagonal(destination, 1) {
        let outcome = Move::Forward.evaluate(board, piece, destination);
        return outcome.valid.then_some(outcome);
    }

    if from.is_diagonal(destination, 2) {
        let take = board.find_take_piece(piece, destination)?;
        let outcome = Move::Jump.evaluate(board, piece, take.pos());
        return (outcome.valid && outcome.landing == Some(destination)).then_some(outcome);
    }

    None
}

/// Apply a legal move and return what happened.
///
/// This function:
/// 1. Classifies and validates the move
/// 2. Removes a jumped piece and bumps its side's capture counter
/// 3. Relocates the moving piece
/// 4. Clears the highlights of the last legality query
///
/// Returns `None` without touching the board when the move is illegal.
pub fn execute_move(board: &mut Board, piece: &Piece, destination: Pos) -> Option<AppliedMove> {
    let outcome = classify_move(board, piece, destination)?;
    let from = piece.pos();

    let moved = board.relocate(from, destination)?;
    if let Some(captured) = outcome.captured {
        board.remove_piece(captured.pos());
        board.record_capture(captured.side());
        log::debug!("{} captured by {}", captured, moved.side());
    }
    board.clear_highlights();

    log::debug!("{:?} {} -> {}", outcome.kind, from, destination);

    Some(AppliedMove {
        kind: outcome.kind,
        piece: moved,
        from,
        to: destination,
        captured: outcome.captured,
    })
}
