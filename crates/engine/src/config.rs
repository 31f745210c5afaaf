//! Engine configuration (renderer preference, logging).
//!
//! Game dimensions and FPS live in [`GameConfig`](crate::types::GameConfig);
//! this covers how the engine itself runs.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::term::BackendPreference;

pub const ENV_BACKEND: &str = "TUI_ARCADE_BACKEND";
pub const ENV_LOG_PATH: &str = "TUI_ARCADE_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "TUI_ARCADE_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub backend: BackendPreference,
    /// File logging is off when unset.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: BackendPreference::Auto,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl EngineConfig {
    /// Create from `TUI_ARCADE_*` environment variables.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let backend = lookup(ENV_BACKEND)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.backend);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_level = lookup(ENV_LOG_LEVEL)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            backend,
            log_path,
            log_level,
        }
    }

    pub fn with_backend(mut self, backend: BackendPreference) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND, "fallback"),
            (ENV_LOG_PATH, " /tmp/arcade.log "),
            (ENV_LOG_LEVEL, "debug"),
        ]));
        assert_eq!(config.backend, BackendPreference::Fallback);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/arcade.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_BACKEND, "curses"),
            (ENV_LOG_PATH, "   "),
            (ENV_LOG_LEVEL, "loud"),
        ]));
        assert_eq!(config, EngineConfig::default());
    }
}
