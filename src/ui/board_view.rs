//! Board rendering for the connect-K GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{BitBoard, GameState, Player, Pos, Symbol};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells per side of the board last drawn
    size: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &GameState,
        last_move: Option<Pos>,
        winning_line: Option<BitBoard>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let board_size = self.fit(ui.available_size(), state.size());
        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_cells(&painter, last_move);
        self.draw_marks(&painter, state);

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = state.valid_move(pos);
                    let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
                    painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_color);

                    if is_valid {
                        self.draw_mark(&painter, pos, state.symbol_of(Player::Human), 0.35);
                    }
                    if response.clicked() && is_valid {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the N x N cells, tinting the last move
    fn draw_cells(&self, painter: &Painter, last_move: Option<Pos>) {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row, col);
                let fill = if last_move == Some(pos) { LAST_MOVE_BG } else { CELL_BG };
                painter.rect_filled(self.cell_rect(pos).shrink(GRID_LINE_WIDTH), CornerRadius::same(4), fill);
            }
        }

        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        painter.rect_stroke(self.grid_rect(), CornerRadius::ZERO, stroke, egui::StrokeKind::Middle);
    }

    /// Draw every mark on the board
    fn draw_marks(&self, painter: &Painter, state: &GameState) {
        for player in [Player::Comp, Player::Human] {
            let symbol = state.symbol_of(player);
            for pos in state.stones(player).iter_ones() {
                self.draw_mark(painter, pos, symbol, 1.0);
            }
        }
    }

    /// Draw a single X or O, `alpha` scales the opacity
    fn draw_mark(&self, painter: &Painter, pos: Pos, symbol: Symbol, alpha: f32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        let width = (self.cell_size * MARK_STROKE_RATIO).max(2.0);

        match symbol {
            Symbol::X => {
                let stroke = Stroke::new(width, X_MARK.gamma_multiply(alpha));
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center + Vec2::new(-radius, radius), center + Vec2::new(radius, -radius)], stroke);
            }
            Symbol::O => {
                painter.circle_stroke(center, radius, Stroke::new(width, O_MARK.gamma_multiply(alpha)));
            }
        }
    }

    /// Outline the cells of the completed line and join its ends
    fn draw_winning_line(&self, painter: &Painter, line: &BitBoard) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);
        let cells: Vec<Pos> = line.iter_ones().collect();

        for &pos in &cells {
            painter.rect_stroke(
                self.cell_rect(pos).shrink(4.0),
                CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        // Cells come out in row-major order, which for a straight line is end to end
        if let (Some(&first), Some(&last)) = (cells.first(), cells.last()) {
            let color = Color32::from_rgba_unmultiplied(50, 220, 50, 160);
            painter.line_segment(
                [self.board_to_screen(first), self.board_to_screen(last)],
                Stroke::new(WIN_STROKE_WIDTH * 2.0, color),
            );
        }
    }

    /// Size the board to the available space, returning its side length
    fn fit(&mut self, available_size: Vec2, size: u8) -> f32 {
        self.size = size;
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(0.0);
        self.cell_size = ((board_size - 2.0 * BOARD_MARGIN) / size as f32).max(0.0);
        board_size
    }

    fn grid_rect(&self) -> Rect {
        let side = self.cell_size * self.size as f32;
        Rect::from_min_size(self.board_rect.min + Vec2::splat(BOARD_MARGIN), Vec2::splat(side))
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect().min + Vec2::new(pos.col as f32, pos.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.grid_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let size = self.size as i32;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen center of its cell
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
