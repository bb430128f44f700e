//! Board structure with capture tracking

use std::collections::HashMap;
use std::fmt;

use super::config::BoardConfig;
use super::position::Position;
use super::{Piece, Pos, Side};
use crate::error::ConfigurationError;
use crate::rules::{self, Move};

/// The four diagonal directions a piece can travel in
pub(crate) const DIAGONALS: [(i64, i64); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Game board with capture tracking
///
/// The cell grid is built once per board and never changes shape. Occupancy is
/// a sparse map from cell to piece, mutated only by [`Board::apply_move`].
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    rows_of_pieces: usize,
    /// Row-major `size * size` cells
    positions: Vec<Position>,
    pieces: HashMap<Pos, Piece>,
    /// Number of Black pieces that have been captured
    captured_black: u32,
    /// Number of White pieces that have been captured
    captured_white: u32,
    /// Destinations from the most recent legality query, highlighted
    valid_positions: Vec<Pos>,
}

/// A move the board has committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub kind: Move,
    /// The piece at its new location
    pub piece: Piece,
    pub from: Pos,
    pub to: Pos,
    pub captured: Option<Piece>,
}

impl Board {
    /// Create a board and place both sides' starting pieces.
    ///
    /// Fails when `2 * rows_of_pieces > size`.
    pub fn new(size: usize, rows_of_pieces: usize) -> Result<Self, ConfigurationError> {
        Self::with_config(BoardConfig::new(size, rows_of_pieces))
    }

    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let BoardConfig {
            size,
            rows_of_pieces,
        } = config;

        let mut positions = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                positions.push(Position::new(row, col));
            }
        }

        let mut pieces = HashMap::new();
        for position in positions.iter().filter(|p| p.is_dark()) {
            let row = position.row();
            if row < rows_of_pieces {
                pieces.insert(position.pos(), Piece::new(Side::Black, position.pos()));
            }
            if row >= size - rows_of_pieces {
                pieces.insert(position.pos(), Piece::new(Side::White, position.pos()));
            }
        }

        log::debug!(
            "new {}x{} board, {} rows per side, {} pieces",
            size,
            size,
            rows_of_pieces,
            pieces.len()
        );

        Ok(Self {
            size,
            rows_of_pieces,
            positions,
            pieces,
            captured_black: 0,
            captured_white: 0,
            valid_positions: Vec::new(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn rows_of_pieces(&self) -> usize {
        self.rows_of_pieces
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.size, self.rows_of_pieces)
    }

    // ----------------------------------------------------------------------
    // Cells
    // ----------------------------------------------------------------------

    /// All cells in row-major order
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Cell at `pos`, or `None` off the board
    #[inline]
    pub fn position(&self, pos: Pos) -> Option<&Position> {
        if pos.row < self.size && pos.col < self.size {
            self.positions.get(pos.to_index(self.size))
        } else {
            None
        }
    }

    #[inline]
    fn position_mut(&mut self, pos: Pos) -> Option<&mut Position> {
        if pos.row < self.size && pos.col < self.size {
            self.positions.get_mut(pos.to_index(self.size))
        } else {
            None
        }
    }

    /// Bounds-checked cell lookup for raw (possibly negative) coordinates
    pub fn get_position_at(&self, row: i32, col: i32) -> Option<&Position> {
        Pos::from_signed(row, col).and_then(|pos| self.position(pos))
    }

    // ----------------------------------------------------------------------
    // Pieces
    // ----------------------------------------------------------------------

    /// Check if a piece occupies `(row, col)`; false off the board
    #[inline]
    pub fn piece_at(&self, row: i32, col: i32) -> bool {
        Pos::from_signed(row, col).is_some_and(|pos| self.piece_at_pos(pos))
    }

    #[inline]
    pub fn piece_at_pos(&self, pos: Pos) -> bool {
        self.pieces.contains_key(&pos)
    }

    pub fn get_piece_at(&self, row: i32, col: i32) -> Option<&Piece> {
        Pos::from_signed(row, col).and_then(|pos| self.get_piece_at_pos(pos))
    }

    #[inline]
    pub fn get_piece_at_pos(&self, pos: Pos) -> Option<&Piece> {
        self.pieces.get(&pos)
    }

    /// All pieces still on the board, in no particular order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces.values().filter(|p| p.side() == side).count()
    }

    /// True when `piece` is exactly what the board holds at its position
    #[inline]
    pub fn is_live(&self, piece: &Piece) -> bool {
        self.pieces.get(&piece.pos()) == Some(piece)
    }

    // ----------------------------------------------------------------------
    // Captures
    // ----------------------------------------------------------------------

    #[inline]
    pub fn captured_black(&self) -> u32 {
        self.captured_black
    }

    #[inline]
    pub fn captured_white(&self) -> u32 {
        self.captured_white
    }

    /// Number of `side`'s pieces that have been captured
    #[inline]
    pub fn captured(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.captured_black,
            Side::White => self.captured_white,
        }
    }

    /// Number of opposing pieces `side` has captured
    #[inline]
    pub fn captures_by(&self, side: Side) -> u32 {
        self.captured(side.opponent())
    }

    // ----------------------------------------------------------------------
    // Jump geometry
    // ----------------------------------------------------------------------

    /// Landing cell for a jump from `current` over `take`.
    ///
    /// The landing row must lie in `[0, size - 1)`, so no jump ever lands on
    /// the last row. Occupancy of the landing cell is not checked here.
    pub fn find_jump_position(&self, current: Pos, take: Pos) -> Option<Pos> {
        let col = if current.col < take.col {
            take.col as i64 + 1
        } else {
            take.col as i64 - 1
        };
        let row = if current.row < take.row {
            take.row as i64 + 1
        } else {
            take.row as i64 - 1
        };
        self.jump_cell(row, col)
    }

    /// Piece sitting between `current` and a destination two diagonal steps
    /// away, if it is a different piece.
    pub fn find_take_piece(&self, current: &Piece, next_position: Pos) -> Option<Piece> {
        let from = current.pos();
        let col = if from.col < next_position.col {
            next_position.col as i64 - 1
        } else {
            next_position.col as i64 + 1
        };
        let row = if from.row < next_position.row {
            next_position.row as i64 - 1
        } else {
            next_position.row as i64 + 1
        };
        let middle = self.jump_cell(row, col)?;
        self.pieces
            .get(&middle)
            .filter(|piece| *piece != current)
            .copied()
    }

    /// Shared bounds for the jump geometry: row in `[0, size - 1)`, column in
    /// `[0, size)`.
    fn jump_cell(&self, row: i64, col: i64) -> Option<Pos> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.size.saturating_sub(1) || col >= self.size {
            return None;
        }
        Some(Pos::new(row, col))
    }

    // ----------------------------------------------------------------------
    // Legal destinations
    // ----------------------------------------------------------------------

    /// Compute and highlight every legal destination for `piece`.
    ///
    /// Highlights from the previous query are cleared first. A piece with no
    /// legal move (or one no longer on the board) yields an empty set.
    pub fn get_valid_moves(&mut self, piece: &Piece) -> Vec<Pos> {
        self.clear_highlights();
        let destinations = self.legal_destinations(piece);
        for &pos in &destinations {
            if let Some(position) = self.position_mut(pos) {
                position.set_highlighted(true);
            }
        }
        self.valid_positions = destinations.clone();
        destinations
    }

    /// Legal destinations for `piece` in row-major order, checking only the
    /// four diagonal neighbours.
    pub fn legal_destinations(&self, piece: &Piece) -> Vec<Pos> {
        let from = piece.pos();
        let candidates = DIAGONALS.iter().filter_map(|&(dr, dc)| {
            let row = from.row as i64 + dr;
            let col = from.col as i64 + dc;
            if row < 0 || col < 0 {
                return None;
            }
            let pos = Pos::new(row as usize, col as usize);
            self.position(pos).map(|_| pos)
        });
        self.collect_destinations(piece, candidates)
    }

    /// Legal destinations found by testing every cell of the board.
    ///
    /// Occupied cells are tried as jump candidates, empty cells as forward
    /// destinations. Always agrees with [`Board::legal_destinations`].
    pub fn full_scan_destinations(&self, piece: &Piece) -> Vec<Pos> {
        let candidates = self.positions.iter().map(Position::pos);
        self.collect_destinations(piece, candidates)
    }

    fn collect_destinations(
        &self,
        piece: &Piece,
        candidates: impl Iterator<Item = Pos>,
    ) -> Vec<Pos> {
        if !self.is_live(piece) {
            return Vec::new();
        }

        let mut found: Vec<Pos> = candidates
            .filter_map(|candidate| {
                let kind = if self.piece_at_pos(candidate) {
                    Move::Jump
                } else {
                    Move::Forward
                };
                let outcome = kind.evaluate(self, piece, candidate);
                if outcome.valid {
                    outcome.landing
                } else {
                    None
                }
            })
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Check whether any piece of `side` has a legal destination
    pub fn has_legal_move(&self, side: Side) -> bool {
        self.pieces
            .values()
            .filter(|p| p.side() == side)
            .any(|p| !self.legal_destinations(p).is_empty())
    }

    /// Destinations of the most recent [`Board::get_valid_moves`] query
    #[inline]
    pub fn valid_positions(&self) -> &[Pos] {
        &self.valid_positions
    }

    /// Drop the highlight flag from every destination of the last query
    pub fn clear_highlights(&mut self) {
        let previous = std::mem::take(&mut self.valid_positions);
        for pos in previous {
            if let Some(position) = self.position_mut(pos) {
                position.set_highlighted(false);
            }
        }
    }

    // ----------------------------------------------------------------------
    // Mutation
    // ----------------------------------------------------------------------

    /// Commit a forward move or jump of `piece` to `destination`.
    ///
    /// Returns `None` and leaves the board untouched when the move is not
    /// legal. See [`rules::execute_move`].
    pub fn apply_move(&mut self, piece: &Piece, destination: Pos) -> Option<AppliedMove> {
        rules::execute_move(self, piece, destination)
    }

    /// Move whatever stands on `from` to the empty cell `to`
    pub(crate) fn relocate(&mut self, from: Pos, to: Pos) -> Option<Piece> {
        if self.pieces.contains_key(&to) {
            return None;
        }
        let moved = self.pieces.remove(&from)?.moved_to(to);
        self.pieces.insert(to, moved);
        Some(moved)
    }

    pub(crate) fn remove_piece(&mut self, pos: Pos) -> Option<Piece> {
        self.pieces.remove(&pos)
    }

    /// Count one more captured piece of `side`
    pub(crate) fn record_capture(&mut self, side: Side) {
        match side {
            Side::Black => self.captured_black += 1,
            Side::White => self.captured_white += 1,
        }
    }
}

#[cfg(test)]
impl Board {
    /// Board of the given size with no pieces on it
    pub(crate) fn empty(size: usize) -> Self {
        let mut board = Self::new(size, 0).expect("zero rows always fit");
        board.pieces.clear();
        board
    }

    /// Drop a piece straight onto a dark cell
    pub(crate) fn place(&mut self, side: Side, row: usize, col: usize) -> Piece {
        let pos = Pos::new(row, col);
        assert!(
            self.position(pos).is_some_and(Position::is_dark),
            "{pos} is not a playable cell"
        );
        let piece = Piece::new(side, pos);
        self.pieces.insert(pos, piece);
        piece
    }
}

impl fmt::Display for Board {
    /// Cell colors first, then occupancy (`b`/`w`, `_` for empty)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.positions.chunks(self.size.max(1)) {
            for position in row {
                let cell = if position.is_dark() { '#' } else { ' ' };
                write!(f, "|{cell}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f)?;

        for row in self.positions.chunks(self.size.max(1)) {
            for position in row {
                let cell = match self.pieces.get(&position.pos()).map(Piece::side) {
                    Some(Side::Black) => 'b',
                    Some(Side::White) => 'w',
                    None => '_',
                };
                write!(f, "|{cell}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
