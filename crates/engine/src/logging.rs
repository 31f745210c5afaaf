//! File logging.
//!
//! Stdout is the game screen, so logs only ever go to a file.

use std::fs::File;

use log::info;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// Install the file logger if `config.log_path` is set.
///
/// Returns whether a logger was installed by this call. A logger that is
/// already installed (a second call, or one set up by the embedding program)
/// is left alone.
pub fn init_logging(config: &EngineConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = File::create(path).map_err(|source| EngineError::Logging {
        path: path.clone(),
        source,
    })?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if WriteLogger::init(config.log_level, log_config, file).is_err() {
        return Ok(false);
    }

    info!("logging to {} at {}", path.display(), config.log_level);
    Ok(true)
}
