//! Renderer strategies: flush a screen snapshot to a terminal and poll input.
//!
//! A renderer owns the terminal for the lifetime of a game loop. It is acquired
//! once before the first frame and released on every exit path; see
//! [`Session`] for the scoped form.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor, event,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};
use log::{debug, trace, warn};

use crate::fb::{Cell, Snapshot};
use crate::input::{event_to_input, InputEvent};
use crate::signal::{self, InterruptGuard};
use crate::types::Color;

/// Which strategy a renderer implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    /// Full-screen, raw mode, cursor-addressed writes.
    Interactive,
    /// Clear-and-reprint with inline ANSI colors.
    Fallback,
    /// No terminal at all (tests, scripted runs).
    Headless,
}

/// Terminal capability used by the game loop.
pub trait Renderer {
    fn kind(&self) -> RendererKind;

    /// Take over the terminal (raw mode, hidden cursor, ...).
    fn acquire(&mut self) -> Result<()>;

    /// Give the terminal back. Must be safe to call more than once.
    fn release(&mut self) -> Result<()>;

    /// Return at most one pending input event. Never blocks.
    fn poll_input(&mut self) -> Result<Option<InputEvent>>;

    /// Present one complete frame.
    fn flush(&mut self, frame: Snapshot<'_>) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn kind(&self) -> RendererKind {
        (**self).kind()
    }

    fn acquire(&mut self) -> Result<()> {
        (**self).acquire()
    }

    fn release(&mut self) -> Result<()> {
        (**self).release()
    }

    fn poll_input(&mut self) -> Result<Option<InputEvent>> {
        (**self).poll_input()
    }

    fn flush(&mut self, frame: Snapshot<'_>) -> Result<()> {
        (**self).flush(frame)
    }
}

/// Scoped terminal ownership: acquired on creation, released on drop.
///
/// Drop runs on early returns, `?` propagation and panics alike, so the
/// terminal is restored before any error reaches the caller.
pub struct Session<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
}

impl<'a, R: Renderer + ?Sized> Session<'a, R> {
    pub fn acquire(renderer: &'a mut R) -> Result<Self> {
        if let Err(err) = renderer.acquire() {
            // Undo whatever part of the setup succeeded.
            let _ = renderer.release();
            return Err(err);
        }
        debug!("terminal acquired ({:?})", renderer.kind());
        Ok(Self { renderer })
    }
}

impl<R: Renderer + ?Sized> Deref for Session<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> DerefMut for Session<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> Drop for Session<'_, R> {
    fn drop(&mut self) {
        match self.renderer.release() {
            Ok(()) => debug!("terminal released ({:?})", self.renderer.kind()),
            Err(err) => warn!("failed to restore terminal: {err:#}"),
        }
    }
}

/// Full-screen crossterm renderer.
///
/// Keeps the previous frame and only rewrites changed runs of cells. Cells that
/// fall outside the real terminal are skipped. While acquired, an external
/// SIGINT is reported as [`InputEvent::Interrupt`] instead of killing the
/// process in raw mode.
pub struct InteractiveRenderer {
    stdout: io::Stdout,
    interrupt: Option<InterruptGuard>,
    last: Vec<Cell>,
    last_size: Option<(u16, u16)>,
    term_size: (u16, u16),
    buf: Vec<u8>,
    raw_mode: bool,
}

impl InteractiveRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            interrupt: None,
            last: Vec::new(),
            last_size: None,
            term_size: (u16::MAX, u16::MAX),
            buf: Vec::with_capacity(64 * 1024),
            raw_mode: false,
        }
    }

    /// Force the next flush to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last_size = None;
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for InteractiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for InteractiveRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Interactive
    }

    fn acquire(&mut self) -> Result<()> {
        match InterruptGuard::install() {
            Ok(guard) => self.interrupt = Some(guard),
            Err(err) => warn!("could not install SIGINT handler: {err}"),
        }
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        if let Ok(size) = terminal::size() {
            self.term_size = size;
        }
        self.invalidate();

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        // The previous SIGINT disposition comes back once the terminal is restored.
        let _interrupt = self.interrupt.take();
        if !self.raw_mode {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let written = self.flush_buf();

        // Leave raw mode even if the screen could not be restored.
        terminal::disable_raw_mode()?;
        self.raw_mode = false;
        written
    }

    fn poll_input(&mut self) -> Result<Option<InputEvent>> {
        if signal::take_interrupt() {
            return Ok(Some(InputEvent::Interrupt));
        }
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let ev = event::read()?;
        if let event::Event::Resize(w, h) = ev {
            self.term_size = (w, h);
            self.invalidate();
        }
        Ok(event_to_input(&ev))
    }

    fn flush(&mut self, frame: Snapshot<'_>) -> Result<()> {
        let size = (frame.width(), frame.height());
        self.buf.clear();

        let skipped = if self.last_size == Some(size) {
            let prev = Snapshot::from_parts(size.0, size.1, &self.last);
            encode_diff_into(prev, frame, self.term_size, &mut self.buf)
        } else {
            encode_full_into(frame, self.term_size, &mut self.buf)
        };
        if skipped > 0 {
            trace!("{skipped} cells could not be encoded this frame");
        }
        self.flush_buf()?;

        self.last.clear();
        self.last.extend_from_slice(frame.cells());
        self.last_size = Some(size);
        Ok(())
    }
}

/// Map a palette entry to a terminal color. `Default` has no attribute.
pub fn palette_color(color: Color) -> Option<style::Color> {
    match color {
        Color::Default => None,
        Color::Red => Some(style::Color::Red),
        Color::Green => Some(style::Color::Green),
        Color::Yellow => Some(style::Color::Yellow),
        Color::Blue => Some(style::Color::Blue),
        Color::Magenta => Some(style::Color::Magenta),
        Color::Cyan => Some(style::Color::Cyan),
        Color::White => Some(style::Color::White),
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Returns the number of cells that failed to encode; those are skipped and the
/// rest of the frame is still written.
pub fn encode_full_into(frame: Snapshot<'_>, clip: (u16, u16), out: &mut Vec<u8>) -> usize {
    let _ = out.queue(terminal::Clear(terminal::ClearType::All));
    let mut current = Color::Default;
    let mut skipped = 0;
    for y in 0..frame.height() {
        skipped += encode_run(frame, 0, y, frame.width(), clip, &mut current, out);
    }
    let _ = out.queue(ResetColor);
    skipped
}

/// Encode only the runs of cells that differ between `prev` and `next`.
pub fn encode_diff_into(
    prev: Snapshot<'_>,
    next: Snapshot<'_>,
    clip: (u16, u16),
    out: &mut Vec<u8>,
) -> usize {
    let mut current = Color::Default;
    let mut skipped = 0;
    for_each_changed_run(prev, next, |x, y, len| {
        skipped += encode_run(next, x, y, len, clip, &mut current, out);
    });
    let _ = out.queue(ResetColor);
    skipped
}

fn encode_run(
    frame: Snapshot<'_>,
    x: u16,
    y: u16,
    len: u16,
    clip: (u16, u16),
    current: &mut Color,
    out: &mut Vec<u8>,
) -> usize {
    let (clip_w, clip_h) = clip;
    if y >= clip_h || x >= clip_w {
        return 0;
    }
    if out.queue(cursor::MoveTo(x, y)).is_err() {
        return len as usize;
    }

    let end = x.saturating_add(len).min(clip_w);
    let mut skipped = 0;
    for cx in x..end {
        let cell = frame.get(cx, y).unwrap_or_default();
        if encode_cell(cell, current, out).is_err() {
            // Resync the cursor so the following cells land in the right column.
            skipped += 1;
            let _ = out.queue(cursor::MoveTo(cx.saturating_add(1), y));
        }
    }
    skipped
}

fn encode_cell(cell: Cell, current: &mut Color, out: &mut Vec<u8>) -> io::Result<()> {
    if cell.color != *current {
        match palette_color(cell.color) {
            Some(color) => out.queue(SetForegroundColor(color))?,
            None => out.queue(ResetColor)?,
        };
        *current = cell.color;
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn for_each_changed_run(prev: Snapshot<'_>, next: Snapshot<'_>, mut f: impl FnMut(u16, u16, u16)) {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width());
        }
        return;
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start);
        }
    }
}
