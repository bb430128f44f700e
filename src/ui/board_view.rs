//! Board rendering for the checkers GUI
//!
//! Reads board state through the public query surface only: cells, their
//! colors and highlight flags, and the pieces on them.

use crate::{Board, Pos, Side};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Number of cells per side of the board being drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<Pos>,
        last_move: Option<(Pos, Pos)>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.size = board.size().max(1);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);

        self.draw_cells(&painter, board);
        self.draw_coordinates(&painter);

        if let Some((from, to)) = last_move {
            self.draw_last_move(&painter, from, to);
        }

        self.draw_pieces(&painter, board);

        if let Some(pos) = selected {
            self.draw_selection(&painter, pos);
        }

        if game_over {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_fill());
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw dark and light cells, tinting highlighted destinations
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for position in board.positions() {
            let rect = self.cell_rect(position.pos());
            let fill = if position.is_dark() { DARK_CELL } else { LIGHT_CELL };
            painter.rect_filled(rect, CornerRadius::ZERO, fill);

            if position.is_highlighted() {
                painter.rect_filled(rect.shrink(2.0), CornerRadius::same(3), highlight_fill());
            }
        }
    }

    /// Draw coordinate labels (row and column indices)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..self.size {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let top = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN * 0.5);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);

            let left = self.board_rect.min + Vec2::new(BOARD_MARGIN * 0.5, offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for piece in board.pieces() {
            self.draw_piece(painter, piece.pos(), piece.side());
        }
    }

    /// Draw a single piece with a shadow and rim
    fn draw_piece(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let (fill, rim, shadow_alpha) = match side {
            Side::Black => (BLACK_PIECE, BLACK_PIECE_RIM, 60),
            Side::White => (WHITE_PIECE, WHITE_PIECE_RIM, 40),
        };

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, shadow_alpha),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.75, Stroke::new(radius * 0.08, rim));
    }

    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        painter.circle_stroke(center, radius, Stroke::new(3.0, SELECTED_RING));
    }

    /// Mark the origin and destination of the last move
    fn draw_last_move(&self, painter: &Painter, from: Pos, to: Pos) {
        let stroke = Stroke::new(2.0, LAST_MOVE_MARKER);
        painter.rect_stroke(
            self.cell_rect(from).shrink(1.0),
            CornerRadius::ZERO,
            stroke,
            egui::StrokeKind::Inside,
        );
        painter.circle_filled(
            self.board_to_screen(to) + Vec2::new(0.0, -self.cell_size * 0.42),
            LAST_MOVE_MARKER_RADIUS,
            LAST_MOVE_MARKER,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Pos::from_signed(row, col)
        } else {
            None
        }
    }

    /// Convert board position to the screen center of its cell
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
