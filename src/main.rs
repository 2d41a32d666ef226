//! Terminal front end: play memory-match on stdin/stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use memory_match::{CoordinatorEvent, GameConfig, TerminalSurface, TileIndex, TurnCoordinator};

#[derive(Parser, Debug)]
#[command(name = "memory-match", about = "Find every matching pair of tiles")]
struct Cli {
    /// TOML file with game settings; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of pairs on the board.
    #[arg(long)]
    pairs: Option<usize>,
    /// Seed for a reproducible board.
    #[arg(long)]
    seed: Option<u64>,
    /// How long a decided pair stays visible, in milliseconds.
    #[arg(long)]
    reveal_delay_ms: Option<u64>,
    /// Tiles per row.
    #[arg(long)]
    columns: Option<usize>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(pairs) = self.pairs {
            config.pair_count = pairs;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay) = self.reveal_delay_ms {
            config.reveal_delay_ms = delay;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select(usize),
    NewGame,
    Quit,
    Help,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "n" | "new" => Command::NewGame,
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "help" | "?" => Command::Help,
        other => other
            .parse::<usize>()
            .map(Command::Select)
            .unwrap_or_else(|_| Command::Unknown(line.to_string())),
    }
}

fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Type a tile number to turn it over, 'n' for a new game, 'q' to quit.")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let surface = TerminalSurface::new(config.tile_count(), config.columns);
    let mut game = TurnCoordinator::from_config(&config, surface)?;

    let start = Instant::now();
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help(&mut stdout)?;
    game.surface_mut().render(&mut stdout)?;

    loop {
        let deadline = game.next_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                game.advance_to(start.elapsed())?;

                match parse_command(&line) {
                    Command::Quit => break,
                    Command::NewGame => game.reset()?,
                    Command::Help => print_help(&mut stdout)?,
                    Command::Select(index) if index < game.controller().tile_count() => {
                        let outcome = game.select(TileIndex::new(index))?;
                        debug!(index, ?outcome, "selection");
                    }
                    Command::Select(index) => writeln!(stdout, "There is no tile {}.", index)?,
                    Command::Unknown(text) => writeln!(stdout, "Unknown command '{}'.", text)?,
                }
                game.surface_mut().render(&mut stdout)?;
            }
            _ = sleep_until(start + deadline.unwrap_or_default()), if deadline.is_some() => {
                let events = game.advance_to(start.elapsed())?;
                // Ticks alone only update the timer; the next render shows it.
                if events.iter().any(|event| !matches!(event, CoordinatorEvent::Tick { .. })) {
                    game.surface_mut().render(&mut stdout)?;
                }
            }
        }
    }

    Ok(())
}
