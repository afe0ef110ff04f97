use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::runtime::GameLoop;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a fixed 20x15 grid")]
struct Cli {
    /// File the log is written to (the terminal is taken by the game)
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Minimum level of log messages
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let mut game_loop = GameLoop::new(GameConfig::default());
    game_loop.run().await?;

    Ok(())
}
