//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

use crate::Cell;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(18, 20, 24);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 200, 0);

// Player one (X) is blue, player two (O) is red
pub const PLAYER_X: Color32 = Color32::from_rgb(40, 90, 255);
pub const PLAYER_O: Color32 = Color32::from_rgb(235, 50, 50);

pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes, as fractions of one cell's edge
pub const GRID_LINE_RATIO: f32 = 0.04;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const WIN_LINE_RATIO: f32 = 0.08;
/// Gap between the grid's ends and the board edge
pub const GRID_INSET_RATIO: f32 = 0.2;
/// Gap between a mark and its cell's edges
pub const MARK_INSET_RATIO: f32 = 0.2;
pub const PREVIEW_ALPHA: u8 = 70;

/// Stroke color for a mark
pub fn mark_color(mark: Cell) -> Color32 {
    match mark {
        Cell::X => PLAYER_X,
        Cell::O => PLAYER_O,
        Cell::Empty => TEXT_MUTED,
    }
}

/// Translucent variant used for hover previews
pub fn preview_color(mark: Cell) -> Color32 {
    let c = mark_color(mark);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), PREVIEW_ALPHA)
}
