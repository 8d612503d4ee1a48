//! Tic-Tac-Toe GUI
//!
//! A graphical interface for playing tic-tac-toe against the computer or another player.

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tictactoe::config::Cli;
use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Some(rounds) = cli.self_play {
        let first = cli.into_config().first;
        match tictactoe::game::self_play(rounds, first) {
            Ok(scores) => println!(
                "{} rounds: X {} - O {} - draws {}",
                scores.rounds(),
                scores.x_wins,
                scores.o_wins,
                scores.draws
            ),
            Err(e) => {
                error!("self-play aborted: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = cli.into_config();
    let side = config.window_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 280.0, side + 60.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )
}
