//! Renderer with no terminal: scripted input, recorded frames.
//!
//! Each call to `poll_input` consumes one script entry, so entry `n` is what the
//! game loop sees on frame `n + 1`. An exhausted script yields no input.

use std::collections::VecDeque;

use anyhow::Result;

use crate::fb::Snapshot;
use crate::input::InputEvent;
use crate::types::{Color, Key};
use crate::{Renderer, RendererKind};

/// One flushed frame: the text of each row plus the raw colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    pub lines: Vec<String>,
    pub colors: Vec<Vec<Color>>,
}

impl RecordedFrame {
    pub fn line(&self, y: usize) -> &str {
        self.lines.get(y).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    script: VecDeque<Option<InputEvent>>,
    frames: Vec<RecordedFrame>,
    acquired: bool,
    acquire_count: usize,
    release_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Frame with a key press.
    pub fn push_key(&mut self, key: Key) -> &mut Self {
        self.script.push_back(Some(InputEvent::Key(key)));
        self
    }

    /// Frames without input.
    pub fn push_idle(&mut self, frames: usize) -> &mut Self {
        self.script.extend(std::iter::repeat(None).take(frames));
        self
    }

    pub fn push_interrupt(&mut self) -> &mut Self {
        self.script.push_back(Some(InputEvent::Interrupt));
        self
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    pub fn is_acquired(&self) -> bool {
        self.acquired
    }

    pub fn acquire_count(&self) -> usize {
        self.acquire_count
    }

    pub fn release_count(&self) -> usize {
        self.release_count
    }
}

impl Renderer for HeadlessRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Headless
    }

    fn acquire(&mut self) -> Result<()> {
        self.acquired = true;
        self.acquire_count += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if self.acquired {
            self.acquired = false;
            self.release_count += 1;
        }
        Ok(())
    }

    fn poll_input(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.script.pop_front().flatten())
    }

    fn flush(&mut self, frame: Snapshot<'_>) -> Result<()> {
        let lines = frame
            .rows()
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .collect();
        let colors = frame
            .rows()
            .map(|row| row.iter().map(|c| c.color).collect::<Vec<_>>())
            .collect();
        self.frames.push(RecordedFrame { lines, colors });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::ScreenBuffer;

    #[test]
    fn script_is_consumed_in_order() {
        let mut r = HeadlessRenderer::new();
        r.push_idle(1).push_key(Key::SPACE).push_interrupt();

        assert_eq!(r.poll_input().unwrap(), None);
        assert_eq!(r.poll_input().unwrap(), Some(InputEvent::Key(Key::SPACE)));
        assert_eq!(r.poll_input().unwrap(), Some(InputEvent::Interrupt));
        assert_eq!(r.poll_input().unwrap(), None);
    }

    #[test]
    fn flush_records_text_and_colors() {
        let mut fb = ScreenBuffer::new(3, 2);
        fb.draw_text(0, 1, "ok", Color::Yellow);

        let mut r = HeadlessRenderer::new();
        r.flush(fb.snapshot()).unwrap();

        let frame = r.last_frame().unwrap();
        assert_eq!(frame.line(0), "   ");
        assert_eq!(frame.line(1), "ok ");
        assert_eq!(frame.colors[1][0], Color::Yellow);
        assert_eq!(frame.colors[1][2], Color::Default);
        assert!(frame.contains("ok"));
    }

    #[test]
    fn release_counts_only_when_acquired() {
        let mut r = HeadlessRenderer::new();
        r.release().unwrap();
        assert_eq!(r.release_count(), 0);
        r.acquire().unwrap();
        r.release().unwrap();
        r.release().unwrap();
        assert_eq!((r.acquire_count(), r.release_count()), (1, 1));
    }
}
