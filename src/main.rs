//! Connect-K GUI
//!
//! Play connect-K on an N x N board against the alpha-beta AI.

use clap::Parser;
use connectk::ui::{ConnectKApp, GameSession};
use connectk::{GameConfig, Symbol};

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Board side length (3-9)
    #[clap(long, default_value = "3")]
    size: u8,
    /// Symbol the human plays with (X or O)
    #[clap(long, default_value = "X")]
    symbol: Symbol,
    /// Marks in a row needed to win (3 up to min(size, 5))
    #[clap(long, default_value = "3")]
    run_length: u8,
    /// Let the computer make the first move
    #[clap(long)]
    ai_first: bool,
    #[clap(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    let config = GameConfig::new(args.size, args.symbol, args.run_length, !args.ai_first);
    config.validate()?;
    let session = GameSession::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Connect-K"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect-K",
        options,
        Box::new(move |cc| Ok(Box::new(ConnectKApp::new(cc, session)))),
    )?;
    Ok(())
}
