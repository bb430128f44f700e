//! Theme constants for the checkers GUI

use egui::Color32;

// Board colors - warm wood tones
pub const LIGHT_CELL: Color32 = Color32::from_rgb(238, 215, 170);
pub const DARK_CELL: Color32 = Color32::from_rgb(120, 78, 44);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(70, 45, 25);
pub const COORD_LABEL: Color32 = Color32::from_rgb(200, 185, 160);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_RIM: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_RIM: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(255, 200, 40);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn highlight_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 220, 120, 110)
}

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
