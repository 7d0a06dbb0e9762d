use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::error::GameError;

/// Routes `log` output to `path`, since the terminal belongs to the game.
///
/// Without a call to this function every log macro is a no-op.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<(), GameError> {
    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)?;
    Ok(())
}
