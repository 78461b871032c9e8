use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tween_snake::game::GameConfig;
use tween_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tween_snake")]
#[command(version, about = "Grid snake with smoothly interpolated motion")]
struct Cli {
    /// JSON game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tiles per board side
    #[arg(long)]
    board_size: Option<usize>,

    /// Segments in a fresh snake
    #[arg(long)]
    starter_length: Option<usize>,

    /// End the game when the snake runs into itself
    #[arg(long)]
    self_collision: bool,

    /// End the game when the snake leaves the board
    #[arg(long)]
    walls: bool,

    /// Ignore steering straight back into the neck
    #[arg(long)]
    reject_reversal: bool,

    /// Keep move timing aligned to the tick interval instead of dropping surplus time
    #[arg(long)]
    carry_surplus: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(starter_length) = self.starter_length {
            config.starter_length = starter_length;
        }
        config.rules.self_collision |= self.self_collision;
        config.rules.walls |= self.walls;
        config.rules.reject_reversal |= self.reject_reversal;
        config.timing.carry_surplus |= self.carry_surplus;

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;

    let mut human_mode = HumanMode::new(config, cli.seed)?;
    human_mode.run().await?;

    Ok(())
}
