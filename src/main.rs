use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use upbirdz::game::GameConfig;
use upbirdz::modes::HumanMode;

#[derive(Parser)]
#[command(name = "upbirdz")]
#[command(version, about = "Guide a growing bird to its pills on a terminal grid")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for item placement, for replaying a game
    #[arg(long)]
    seed: Option<u64>,

    /// Starting tick period in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// Fastest allowed tick period in milliseconds
    #[arg(long)]
    min_speed: Option<u64>,

    /// Minimum drag distance (approximate pixels) for a mouse swipe
    #[arg(long)]
    swipe_threshold: Option<f32>,

    /// Write logs to this file (the terminal is busy with the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(speed) = self.speed {
            config.initial_tick_ms = speed;
        }
        if let Some(min_speed) = self.min_speed {
            config.min_tick_ms = min_speed;
        }
        if let Some(threshold) = self.swipe_threshold {
            config.swipe_threshold = threshold;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    upbirdz::logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await?;

    Ok(())
}
