//! Board rendering for the tic-tac-toe GUI

use crate::game::{cell_at, cell_bounds, GameEvent, PointerInput};
use crate::rules::{LineKind, Outcome, WinningLine};
use crate::{Cell, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the renderer has been told so far.
///
/// Built only from [`GameEvent`]s, never from the game state directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    marks: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    highlight: Option<(WinningLine, Cell)>,
    outcome: Option<Outcome>,
}

impl Canvas {
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PlaceMark { pos, mark } => {
                self.marks[pos.row as usize][pos.col as usize] = mark;
            }
            GameEvent::HighlightLine { line, mark } => self.highlight = Some((line, mark)),
            GameEvent::RoundOver { outcome } => self.outcome = Some(outcome),
            // Timing belongs to the driver
            GameEvent::Pause { .. } => {}
            GameEvent::ResetBoard { .. } => *self = Canvas::default(),
        }
    }

    pub fn mark(&self, pos: Pos) -> Cell {
        self.marks[pos.row as usize][pos.col as usize]
    }

    pub fn highlight(&self) -> Option<(WinningLine, Cell)> {
        self.highlight
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

/// Pointer state over the board for one frame
#[derive(Debug, Clone, Copy)]
pub struct BoardInput {
    /// Relative to the board's top-left corner
    pub position: Option<(f32, f32)>,
    pub pressed: bool,
    pub width: f32,
    pub height: f32,
}

impl PointerInput for BoardInput {
    fn pointer_position(&self) -> Option<(f32, f32)> {
        self.position
    }

    fn pointer_just_pressed(&self) -> bool {
        self.pressed
    }
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    canvas: Canvas,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    pub fn apply(&mut self, event: &GameEvent) {
        self.canvas.apply(event);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Render the board and report the pointer.
    ///
    /// `preview` is the mark to ghost under the pointer when a human may move.
    pub fn show(&mut self, ui: &mut egui::Ui, preview: Option<Cell>) -> BoardInput {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(90.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;
        let (width, height) = (self.board_rect.width(), self.board_rect.height());

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter);

        if let Some((line, mark)) = self.canvas.highlight {
            self.draw_winning_line(&painter, line, mark);
        }

        let position = response
            .hover_pos()
            .map(|p| p - self.board_rect.min)
            .map(|v| (v.x, v.y));

        if let (Some(mark), Some((x, y))) = (preview, position) {
            if let Some(pos) = cell_at(x, y, width, height) {
                if self.canvas.mark(pos) == Cell::Empty {
                    self.draw_mark(&painter, pos, mark, preview_color(mark));
                }
            }
        }

        BoardInput {
            position,
            pressed: response.clicked(),
            width,
            height,
        }
    }

    fn cell_size(&self) -> f32 {
        self.board_rect.width() / BOARD_SIZE as f32
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let size = self.board_rect.size();
        let (left, top, right, bottom) = cell_bounds(pos, size.x, size.y);
        Rect::from_min_max(
            self.board_rect.min + Vec2::new(left, top),
            self.board_rect.min + Vec2::new(right, bottom),
        )
    }

    /// Draw the two vertical and two horizontal grid lines
    fn draw_grid(&self, painter: &Painter) {
        let cell = self.cell_size();
        let stroke = Stroke::new(cell * GRID_LINE_RATIO, GRID_LINE);
        let inset = cell * GRID_INSET_RATIO;
        let rect = self.board_rect;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * cell;

            // Vertical line
            painter.line_segment(
                [
                    Pos2::new(rect.min.x + offset, rect.min.y + inset),
                    Pos2::new(rect.min.x + offset, rect.max.y - inset),
                ],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [
                    Pos2::new(rect.min.x + inset, rect.min.y + offset),
                    Pos2::new(rect.max.x - inset, rect.min.y + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter) {
        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let mark = self.canvas.mark(pos);
            if mark != Cell::Empty {
                self.draw_mark(painter, pos, mark, mark_color(mark));
            }
        }
    }

    /// X as two crossing strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Cell, color: Color32) {
        let cell = self.cell_size();
        let stroke = Stroke::new(cell * MARK_STROKE_RATIO, color);
        let inner = self.cell_rect(pos).shrink(cell * MARK_INSET_RATIO);

        match mark {
            Cell::X => {
                painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
                painter.line_segment([inner.left_bottom(), inner.right_top()], stroke);
            }
            Cell::O => {
                painter.circle_stroke(inner.center(), inner.width().min(inner.height()) / 2.0, stroke);
            }
            Cell::Empty => {}
        }
    }

    /// Draw the winning line edge to edge in the winner's color
    fn draw_winning_line(&self, painter: &Painter, line: WinningLine, mark: Cell) {
        let rect = self.board_rect;
        let stroke = Stroke::new(self.cell_size() * WIN_LINE_RATIO, mark_color(mark));

        let ends = match line.kind {
            LineKind::Row => {
                let y = self.cell_rect(Pos::new(line.index, 0)).center().y;
                [Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)]
            }
            LineKind::Column => {
                let x = self.cell_rect(Pos::new(0, line.index)).center().x;
                [Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)]
            }
            LineKind::Diagonal if line.index == 0 => [rect.left_top(), rect.right_bottom()],
            LineKind::Diagonal => [rect.right_top(), rect.left_bottom()],
        };

        painter.line_segment(ends, stroke);
    }
}
