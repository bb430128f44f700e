//! Board cells: fixed identity and color, mutable highlight flag

use super::Pos;

/// Cell color. Only dark cells are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Dark,
    Light,
}

impl CellColor {
    /// Staggered checkerboard pattern.
    ///
    /// Row 0 is staggered: a cell is dark when `col + 1` is even. The pattern
    /// flips on every following row, which makes a cell dark exactly when
    /// `row + col` is odd.
    #[inline]
    pub fn at(row: usize, col: usize) -> CellColor {
        let staggered = row % 2 == 0;
        let even_col = (col + 1) % 2 == 0;
        if staggered == even_col {
            CellColor::Dark
        } else {
            CellColor::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == CellColor::Dark
    }
}

/// A single board cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pos: Pos,
    color: CellColor,
    highlighted: bool,
}

impl Position {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            pos: Pos::new(row, col),
            color: CellColor::at(row, col),
            highlighted: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.pos.col
    }

    #[inline]
    pub fn color(&self) -> CellColor {
        self.color
    }

    #[inline]
    pub fn is_dark(&self) -> bool {
        self.color.is_dark()
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Display-only flag; legality never reads it
    #[inline]
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
