mod config;
mod offline;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;

use config::{DEFAULT_CONFIG_FILE, load_config};
use ui::TicTacToeApp;

const WINDOW_TITLE: &str = "Tic-Tac-Toe AI";

#[derive(Parser)]
#[command(name = "tictactoe_desktop", about = "Tic-Tac-Toe against an unbeatable computer")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Write the effective settings back to the config file and continue.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Also log minimax scores and ignored clicks.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = load_config(&args.config, args.save_config);
    log!(
        "Starting with cell size {}px, {} moves first",
        config.window.cell_size,
        config.game.first_player
    );

    let board_size = config.window.board_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size, board_size])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(&config)))),
    )?;

    Ok(())
}
