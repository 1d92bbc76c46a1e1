use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Position, TicTacToeGameState, WinningLine};
use eframe::egui;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::WHITE;
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(28, 170, 156);
const X_COLOR: egui::Color32 = egui::Color32::from_rgb(242, 85, 96);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(28, 170, 156);
const HOVER_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(20, 30, 50, 20);
const STRIKE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 40, 40, 160);

/// Maps a pointer position, relative to the board's top-left corner, to the
/// cell under it by integer division against the cell size.
pub fn cell_at(offset: egui::Vec2, cell_size: f32) -> Option<Position> {
    if offset.x < 0.0 || offset.y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let col = (offset.x / cell_size) as usize;
    let row = (offset.y / cell_size) as usize;
    let pos = Position::new(row, col);
    pos.is_on_board().then_some(pos)
}

pub struct BoardView {
    cell_size: f32,
}

impl BoardView {
    const GRID_LINE_WIDTH: f32 = 2.0;
    const MARK_LINE_WIDTH: f32 = 5.0;
    const MARK_PADDING: f32 = 0.2;
    const CIRCLE_RADIUS: f32 = 0.4;
    const STRIKE_WIDTH: f32 = 6.0;

    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Paints the board and returns the cell clicked this frame, if clicks
    /// are accepted.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        game: &TicTacToeGameState,
        accepts_clicks: bool,
    ) -> Option<Position> {
        let board_size = self.cell_size * BOARD_SIZE as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);
        self.draw_grid(&painter, rect);
        self.draw_marks(&painter, rect, game.board());

        if let Some(line) = game.winning_line() {
            self.draw_winning_line(&painter, rect, line);
        }

        if !accepts_clicks {
            return None;
        }

        if let Some(hover_pos) = response.hover_pos()
            && let Some(pos) = cell_at(hover_pos - rect.min, self.cell_size)
            && game.board().is_empty_at(pos)
        {
            painter.rect_filled(self.cell_rect(rect, pos), 0.0, HOVER_COLOR);
        }

        if response.clicked()
            && let Some(click_pos) = response.interact_pointer_pos()
        {
            return cell_at(click_pos - rect.min, self.cell_size);
        }

        None
    }

    fn cell_rect(&self, board_rect: egui::Rect, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + pos.col as f32 * self.cell_size,
                board_rect.top() + pos.row as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: egui::Rect) {
        let stroke = egui::Stroke::new(Self::GRID_LINE_WIDTH, LINE_COLOR);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &egui::Painter, rect: egui::Rect, board: &Board) {
        for pos in Position::all() {
            let cell_rect = self.cell_rect(rect, pos);
            match board.get(pos) {
                Mark::Player => self.draw_x(painter, cell_rect),
                Mark::Computer => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * Self::MARK_PADDING;
        let stroke = egui::Stroke::new(Self::MARK_LINE_WIDTH, X_COLOR);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
                egui::pos2(rect.right() - padding, rect.top() + padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width() * Self::CIRCLE_RADIUS;
        let stroke = egui::Stroke::new(Self::MARK_LINE_WIDTH, O_COLOR);
        painter.circle_stroke(rect.center(), radius, stroke);
    }

    fn draw_winning_line(&self, painter: &egui::Painter, rect: egui::Rect, line: WinningLine) {
        let start = self.cell_rect(rect, line.start).center();
        let end = self.cell_rect(rect, line.end).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(Self::STRIKE_WIDTH, STRIKE_COLOR),
        );
    }
}
