//! Terminal capability detection and renderer selection.
//!
//! Detection runs once at startup and yields a [`RendererKind`]; nothing is
//! queried again while the game runs.

use std::env;
use std::fmt;
use std::io::{self, IsTerminal};
use std::str::FromStr;

use crate::ansi::AnsiRenderer;
use crate::renderer::{InteractiveRenderer, Renderer, RendererKind};

/// Which renderer the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Interactive when the terminal supports it, otherwise fallback.
    #[default]
    Auto,
    Interactive,
    Fallback,
}

impl FromStr for BackendPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(BackendPreference::Auto),
            "interactive" | "raw" | "fullscreen" => Ok(BackendPreference::Interactive),
            "fallback" | "ansi" | "line" => Ok(BackendPreference::Fallback),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendPreference::Auto => "auto",
            BackendPreference::Interactive => "interactive",
            BackendPreference::Fallback => "fallback",
        })
    }
}

/// What the hosting terminal looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    /// `$TERM`, if set.
    pub term: Option<String>,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            stdin_tty: io::stdin().is_terminal(),
            stdout_tty: io::stdout().is_terminal(),
            term: env::var("TERM").ok().filter(|t| !t.is_empty()),
        }
    }

    /// Raw, cursor-addressed mode needs a real terminal on both ends.
    pub fn supports_interactive(&self) -> bool {
        self.stdin_tty && self.stdout_tty && self.term.as_deref() != Some("dumb")
    }

    /// Pick a strategy. An explicit preference always wins.
    pub fn select(&self, preference: BackendPreference) -> RendererKind {
        match preference {
            BackendPreference::Interactive => RendererKind::Interactive,
            BackendPreference::Fallback => RendererKind::Fallback,
            BackendPreference::Auto if self.supports_interactive() => RendererKind::Interactive,
            BackendPreference::Auto => RendererKind::Fallback,
        }
    }
}

/// Build the terminal renderer for a strategy.
///
/// `Headless` has no terminal to talk to and maps to the fallback renderer.
pub fn create_renderer(kind: RendererKind) -> Box<dyn Renderer> {
    match kind {
        RendererKind::Interactive => Box::new(InteractiveRenderer::new()),
        RendererKind::Fallback | RendererKind::Headless => Box::new(AnsiRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(stdin_tty: bool, stdout_tty: bool, term: Option<&str>) -> Capabilities {
        Capabilities {
            stdin_tty,
            stdout_tty,
            term: term.map(str::to_string),
        }
    }

    #[test]
    fn auto_prefers_interactive_on_a_tty() {
        let c = caps(true, true, Some("xterm-256color"));
        assert_eq!(c.select(BackendPreference::Auto), RendererKind::Interactive);
        // Windows consoles often leave TERM unset.
        let c = caps(true, true, None);
        assert_eq!(c.select(BackendPreference::Auto), RendererKind::Interactive);
    }

    #[test]
    fn auto_falls_back_without_a_tty_or_on_dumb_terminals() {
        assert_eq!(
            caps(false, true, Some("xterm")).select(BackendPreference::Auto),
            RendererKind::Fallback
        );
        assert_eq!(
            caps(true, false, Some("xterm")).select(BackendPreference::Auto),
            RendererKind::Fallback
        );
        assert_eq!(
            caps(true, true, Some("dumb")).select(BackendPreference::Auto),
            RendererKind::Fallback
        );
    }

    #[test]
    fn explicit_preference_wins() {
        let c = caps(false, false, None);
        assert_eq!(c.select(BackendPreference::Interactive), RendererKind::Interactive);
        let c = caps(true, true, Some("xterm"));
        assert_eq!(c.select(BackendPreference::Fallback), RendererKind::Fallback);
    }

    #[test]
    fn preference_parses() {
        assert_eq!("AUTO".parse(), Ok(BackendPreference::Auto));
        assert_eq!("ansi".parse(), Ok(BackendPreference::Fallback));
        assert_eq!(" interactive ".parse(), Ok(BackendPreference::Interactive));
        assert!("curses".parse::<BackendPreference>().is_err());
        assert_eq!(BackendPreference::Fallback.to_string(), "fallback");
    }
}
