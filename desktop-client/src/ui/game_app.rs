use common::games::tictactoe::Outcome;
use common::log;
use eframe::egui;
use std::time::Instant;

use crate::config::Config;
use crate::offline::{FrameAction, TicTacToeRunner};

use super::board_view::BoardView;

pub struct TicTacToeApp {
    runner: TicTacToeRunner,
    board_view: BoardView,
    exiting: bool,
}

impl TicTacToeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            runner: TicTacToeRunner::new(&config.game),
            board_view: BoardView::new(config.window.cell_size as f32),
            exiting: false,
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let game = self.runner.game();
        let Some(message) = game.status().message() else {
            return;
        };
        let color = match game.status() {
            Outcome::PlayerWins => egui::Color32::from_rgb(242, 85, 96),
            _ => egui::Color32::from_rgb(28, 170, 156),
        };
        let rect = ui.max_rect();
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(40.0),
            color,
        );
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting {
            return;
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            log!("Window closed before the game ended");
            self.exiting = true;
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let accepts_clicks = self.runner.accepts_clicks();
                if let Some(pos) = self.board_view.show(ui, self.runner.game(), accepts_clicks) {
                    self.runner.handle_click(pos, Instant::now());
                    ctx.request_repaint();
                }
                self.render_status(ui);
            });

        match self.runner.advance(Instant::now()) {
            FrameAction::Idle => {}
            FrameAction::Repaint => ctx.request_repaint(),
            FrameAction::RepaintAfter(delay) => ctx.request_repaint_after(delay),
            FrameAction::Exit(message) => {
                println!("{}", message);
                self.exiting = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
