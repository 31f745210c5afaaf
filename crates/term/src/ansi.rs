//! Line-oriented fallback renderer using plain ANSI escape sequences.
//!
//! Used when the terminal cannot be put into raw mode. Every frame moves the
//! cursor home and reprints the whole grid as one block of text; color escapes
//! are only emitted where the color changes along a row.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use log::{debug, warn};

use crate::fb::Snapshot;
use crate::input::{event_to_input, InputEvent};
use crate::signal::{self, InterruptGuard};
use crate::types::Color;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// SGR foreground sequence for a palette entry (bright variants).
pub fn color_sgr(color: Color) -> &'static str {
    match color {
        Color::Default => RESET,
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
    }
}

/// Where the fallback renderer gets keys from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackInput {
    /// Non-blocking check on the controlling terminal (line-buffered).
    Terminal,
    /// No keyboard; only interrupts are observed.
    None,
}

impl FallbackInput {
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            FallbackInput::Terminal
        } else {
            FallbackInput::None
        }
    }
}

/// Clear-and-reprint renderer writing to any `Write` (stdout by default).
pub struct AnsiRenderer<W: Write = io::Stdout> {
    out: W,
    input: FallbackInput,
    interrupt: Option<InterruptGuard>,
    text: String,
    acquired: bool,
}

impl AnsiRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), FallbackInput::detect())
    }
}

impl Default for AnsiRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> AnsiRenderer<W> {
    pub fn with_writer(out: W, input: FallbackInput) -> Self {
        Self {
            out,
            input,
            interrupt: None,
            text: String::with_capacity(8 * 1024),
            acquired: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn poll_terminal(&mut self) -> Option<InputEvent> {
        let polled = event::poll(Duration::ZERO).and_then(|ready| {
            if ready {
                event::read().map(|ev| event_to_input(&ev))
            } else {
                Ok(None)
            }
        });
        match polled {
            Ok(input) => input,
            Err(err) => {
                // Best effort only: stop asking a terminal that cannot answer.
                debug!("fallback input disabled: {err}");
                self.input = FallbackInput::None;
                None
            }
        }
    }
}

impl<W: Write> crate::Renderer for AnsiRenderer<W> {
    fn kind(&self) -> crate::RendererKind {
        crate::RendererKind::Fallback
    }

    fn acquire(&mut self) -> Result<()> {
        match InterruptGuard::install() {
            Ok(guard) => self.interrupt = Some(guard),
            Err(err) => warn!("could not install SIGINT handler: {err}"),
        }
        self.acquired = true;
        self.out.write_all(CURSOR_HIDE.as_bytes())?;
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if !self.acquired {
            return Ok(());
        }
        self.acquired = false;
        self.interrupt = None;
        self.out.write_all(RESET.as_bytes())?;
        self.out.write_all(CURSOR_SHOW.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn poll_input(&mut self) -> Result<Option<InputEvent>> {
        if signal::take_interrupt() {
            return Ok(Some(InputEvent::Interrupt));
        }
        Ok(match self.input {
            FallbackInput::Terminal => self.poll_terminal(),
            FallbackInput::None => None,
        })
    }

    fn flush(&mut self, frame: Snapshot<'_>) -> Result<()> {
        self.text.clear();
        encode_frame_into(frame, &mut self.text);
        self.out.write_all(self.text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a whole frame as one text block.
///
/// Layout: cursor-home, then the rows joined by `\n`. Each row opens with the
/// escape for its first cell's color, switches color only when it changes, and
/// ends with a reset.
pub fn encode_frame_into(frame: Snapshot<'_>, out: &mut String) {
    out.push_str(CURSOR_HOME);
    for (y, row) in frame.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        let mut current: Option<Color> = None;
        for cell in row {
            if current != Some(cell.color) {
                out.push_str(color_sgr(cell.color));
                current = Some(cell.color);
            }
            out.push(cell.ch);
        }
        out.push_str(RESET);
    }
}
