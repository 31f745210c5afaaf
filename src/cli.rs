//! Command-line options shared by the bundled games.
//!
//! Flags override the `TUI_ARCADE_*` environment variables.

use std::path::PathBuf;

use clap::Args;

use crate::engine::EngineConfig;
use crate::term::BackendPreference;
use crate::types::GameConfig;

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Renderer: auto, interactive or fallback
    #[arg(short, long)]
    pub backend: Option<BackendPreference>,

    /// Frames per second (overrides the game's default)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write a log file here
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CommonArgs {
    /// Environment config with these flags applied on top.
    pub fn engine_config(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(path) = &self.log_file {
            config.log_path = Some(path.clone());
        }
        config
    }

    pub fn game_config(&self, mut config: GameConfig) -> GameConfig {
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn flags_override_config() {
        let cli = TestCli::parse_from(["game", "--backend", "fallback", "--fps", "30", "--log-file", "g.log"]);
        let engine = cli.common.engine_config(EngineConfig::default());
        assert_eq!(engine.backend, BackendPreference::Fallback);
        assert_eq!(engine.log_path, Some(PathBuf::from("g.log")));
        assert_eq!(cli.common.game_config(GameConfig::new(10, 5)).target_fps, 30);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = TestCli::parse_from(["game"]);
        let base = EngineConfig::default().with_backend(BackendPreference::Interactive);
        assert_eq!(cli.common.engine_config(base.clone()), base);
        assert_eq!(cli.common.game_config(GameConfig::new(10, 5)).target_fps, 15);
    }

    #[test]
    fn bad_backend_is_rejected() {
        assert!(TestCli::try_parse_from(["game", "--backend", "curses"]).is_err());
    }
}
