use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use greedy_hunt::game::GameConfig;
use greedy_hunt::modes::{TerminalMode, WindowMode};
use log::info;

#[derive(Parser)]
#[command(name = "greedy-hunt")]
#[command(version, about = "Snake's Greedy Hunt, a grid-based arcade snake")]
struct Cli {
    /// Where to play
    #[arg(long, value_enum, default_value = "window")]
    mode: Mode,

    /// Directory holding graphics/food.png and sounds/{eat,wall}.wav
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Open a window with sprites and sound
    Window,
    /// Draw the board in the terminal
    Terminal,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    info!("Starting the game...");
    let config = GameConfig::default();

    match cli.mode {
        Mode::Window => {
            WindowMode::new(config, cli.assets, cli.seed).run();
        }
        Mode::Terminal => {
            let mut terminal_mode = TerminalMode::new(config, cli.seed);
            terminal_mode.run()?;
        }
    }

    Ok(())
}
