use std::io;

use thiserror::Error;

/// Failures that can surface outside the simulation rules.
///
/// Turning backwards, hitting yourself and food landing on the snake are
/// ordinary game transitions and never show up here.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("grid {width}x{height} is too small, at least {required} cells are needed")]
    GridTooSmall {
        width: u16,
        height: u16,
        required: usize,
    },

    #[error("base speed must be at least one tick per second")]
    ZeroSpeed,

    #[error("no free cell left for food on a {width}x{height} grid")]
    NoSpaceForFood { width: u16, height: u16 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
