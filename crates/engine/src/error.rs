//! Engine error type.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which game callback failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Setup,
    Update,
    Draw,
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Callback::Setup => "setup",
            Callback::Update => "update",
            Callback::Draw => "draw",
        })
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Acquiring, polling, flushing to or releasing the terminal failed.
    #[error("terminal error: {0:#}")]
    Terminal(#[source] anyhow::Error),

    /// A game callback returned an error. The terminal is already restored.
    #[error("game {callback} failed: {source:#}")]
    Game {
        callback: Callback,
        #[source]
        source: anyhow::Error,
    },

    /// `run` was called on a loop that has already run.
    #[error("game loop has already run")]
    AlreadyRun,

    #[error("cannot open log file {}: {source}", .path.display())]
    Logging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl EngineError {
    pub(crate) fn game(callback: Callback, source: anyhow::Error) -> Self {
        EngineError::Game { callback, source }
    }

    /// The failing callback, for `Game` errors.
    pub fn callback(&self) -> Option<Callback> {
        match self {
            EngineError::Game { callback, .. } => Some(*callback),
            _ => None,
        }
    }
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
