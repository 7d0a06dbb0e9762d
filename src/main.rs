use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::terminal;
use log::{LevelFilter, error, warn};
use torus_snake::clock::FrameLimiter;
use torus_snake::config::{
    BASE_SPEED, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GameConfig, GridSize, THEME_CLASSIC,
};
use torus_snake::controller::{Controller, RunSummary};
use torus_snake::error::GameError;
use torus_snake::game::GameSession;
use torus_snake::input::TerminalInput;
use torus_snake::logging::init_file_logger;
use torus_snake::terminal::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a grid whose edges wrap around")]
struct Cli {
    /// Grid width in cells [default: 30, or less to fit the terminal].
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells [default: 30, or less to fit the terminal].
    #[arg(long)]
    height: Option<u16>,

    /// Starting speed in ticks per second.
    #[arg(long, default_value_t = BASE_SPEED)]
    speed: u32,

    /// Fixed RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level used with `--log-file`.
    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) => {
            println!(
                "Final score: {} (best {} over {} round(s))",
                summary.last_score, summary.best_score, summary.rounds
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error}");
            eprintln!("torus-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<RunSummary, GameError> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let terminal_size = match terminal::size() {
        Ok(size) => Some(size),
        Err(error) => {
            warn!("could not read terminal size: {error}");
            None
        }
    };
    let config = GameConfig {
        grid: requested_grid(cli.width, cli.height, terminal_size),
        base_speed: cli.speed,
    };
    let session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(config, seed)?,
        None => GameSession::new(config)?,
    };

    install_panic_hook();
    let terminal = TerminalSession::enter(&THEME_CLASSIC)?;

    let mut controller = Controller::new(session, TerminalInput, terminal, FrameLimiter::new());
    controller.run()
}

/// Uses explicit dimensions as given; defaults shrink to fit the terminal.
fn requested_grid(
    width: Option<u16>,
    height: Option<u16>,
    terminal_size: Option<(u16, u16)>,
) -> GridSize {
    let default = match terminal_size {
        Some((columns, rows)) => GridSize {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
        .fit_within_terminal(columns, rows),
        None => GridSize {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        },
    };

    GridSize {
        width: width.unwrap_or(default.width),
        height: height.unwrap_or(default.height),
    }
}

#[cfg(test)]
mod tests {
    use torus_snake::config::GridSize;

    use super::requested_grid;

    #[test]
    fn default_grid_shrinks_to_a_standard_terminal() {
        assert_eq!(
            requested_grid(None, None, Some((80, 24))),
            GridSize {
                width: 30,
                height: 20
            }
        );
    }

    #[test]
    fn explicit_dimensions_are_kept() {
        assert_eq!(
            requested_grid(Some(40), None, Some((80, 24))),
            GridSize {
                width: 40,
                height: 20
            }
        );
        assert_eq!(
            requested_grid(None, None, None),
            GridSize {
                width: 30,
                height: 30
            }
        );
    }
}
