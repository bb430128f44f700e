//! Checkers GUI
//!
//! Two players share one window (hotseat).
//!
//! Usage: `checkers [SIZE] [ROWS_OF_PIECES]`, defaulting to an 8x8 board with
//! three rows per side.

use checkers::ui::{CheckersApp, GameState};
use checkers::BoardConfig;

fn parse_config() -> Result<BoardConfig, std::num::ParseIntError> {
    let mut config = BoardConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(size) = args.next() {
        config.size = size.parse()?;
    }
    if let Some(rows) = args.next() {
        config.rows_of_pieces = rows.parse()?;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_config()?;
    let state = GameState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |_cc| Ok(Box::new(CheckersApp::new(state)))),
    )?;
    Ok(())
}
