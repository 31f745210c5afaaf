//! Screen buffer and cell types for terminal rendering.
//!
//! All drawing is clipped: coordinates are signed and anything that falls
//! outside `[0, width) x [0, height)` is silently dropped.

use std::ops::Range;

use crate::types::Color;

/// Box corner glyph.
pub const BOX_CORNER: char = '+';
/// Box horizontal edge glyph.
pub const BOX_HORIZONTAL: char = '-';
/// Box vertical edge glyph.
pub const BOX_VERTICAL: char = '|';

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Default,
    };

    pub const fn new(ch: char, color: Color) -> Self {
        Self { ch, color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Fixed-size 2D grid of colored character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn center_x(&self) -> i32 {
        i32::from(self.width) / 2
    }

    pub fn center_y(&self) -> i32 {
        i32::from(self.height) / 2
    }

    #[inline(always)]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Indices `start..start + len` clamped to `0..limit`.
    fn span(start: i64, len: i64, limit: u16) -> Range<usize> {
        let lo = start.clamp(0, i64::from(limit));
        let hi = start.saturating_add(len.max(0)).clamp(lo, i64::from(limit));
        lo as usize..hi as usize
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(i64::from(x), i64::from(y)).map(|i| self.cells[i])
    }

    /// Reset every cell to a blank with the default color.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Write one cell. A NUL character writes a blank.
    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, color: Color) {
        self.put(i64::from(x), i64::from(y), ch, color);
    }

    fn put(&mut self, x: i64, y: i64, ch: char, color: Color) {
        if let Some(i) = self.idx(x, y) {
            let ch = if ch == '\0' { ' ' } else { ch };
            self.cells[i] = Cell { ch, color };
        }
    }

    /// Write a single row of text starting at `(x, y)`. No wrapping.
    ///
    /// Characters left of column 0 are skipped without being visited
    /// individually; drawing stops at the right edge.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.text(i64::from(x), i64::from(y), text, color);
    }

    fn text(&mut self, x: i64, y: i64, text: &str, color: Color) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let cols = Self::span(x, i64::MAX, self.width);
        let skip = usize::try_from(x.min(0).unsigned_abs()).unwrap_or(usize::MAX);
        for (cx, ch) in cols.zip(text.chars().skip(skip)) {
            self.put(cx as i64, y, ch, color);
        }
    }

    pub fn draw_hline(&mut self, x: i32, y: i32, length: i32, ch: char, color: Color) {
        self.hline(i64::from(x), i64::from(y), i64::from(length), ch, color);
    }

    pub fn draw_vline(&mut self, x: i32, y: i32, length: i32, ch: char, color: Color) {
        self.vline(i64::from(x), i64::from(y), i64::from(length), ch, color);
    }

    fn hline(&mut self, x: i64, y: i64, length: i64, ch: char, color: Color) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        for cx in Self::span(x, length, self.width) {
            self.put(cx as i64, y, ch, color);
        }
    }

    fn vline(&mut self, x: i64, y: i64, length: i64, ch: char, color: Color) {
        if x < 0 || x >= i64::from(self.width) {
            return;
        }
        for cy in Self::span(y, length, self.height) {
            self.put(x, cy as i64, ch, color);
        }
    }

    /// Draw an ASCII border, optionally with a title centered on the top edge.
    ///
    /// The title is padded with one space on each side and overwrites the top
    /// border where they overlap. Empty boxes (`w <= 0` or `h <= 0`) draw nothing.
    /// Edges are computed in `i64`, so boxes reaching past `i32::MAX` clip
    /// like any other.
    pub fn draw_box(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        title: Option<&str>,
        color: Color,
    ) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));
        let right = x + w - 1;
        let bottom = y + h - 1;

        self.put(x, y, BOX_CORNER, color);
        self.put(right, y, BOX_CORNER, color);
        self.put(x, bottom, BOX_CORNER, color);
        self.put(right, bottom, BOX_CORNER, color);

        self.hline(x + 1, y, w - 2, BOX_HORIZONTAL, color);
        self.hline(x + 1, bottom, w - 2, BOX_HORIZONTAL, color);
        self.vline(x, y + 1, h - 2, BOX_VERTICAL, color);
        self.vline(right, y + 1, h - 2, BOX_VERTICAL, color);

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            let padded = format!(" {title} ");
            let len = padded.chars().count() as i64;
            self.text(x + (w - len).div_euclid(2), y, &padded, color);
        }
    }

    /// Fill the overlap of the rectangle with the buffer. Work is bounded by
    /// the buffer size, not the requested size.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, color: Color) {
        let cols = Self::span(i64::from(x), i64::from(w), self.width);
        let rows = Self::span(i64::from(y), i64::from(h), self.height);
        if cols.is_empty() {
            return;
        }
        let ch = if ch == '\0' { ' ' } else { ch };
        let stride = self.width as usize;
        for cy in rows {
            let start = cy * stride;
            self.cells[start + cols.start..start + cols.end].fill(Cell { ch, color });
        }
    }

    /// Immutable view of the grid as drawn so far.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.width,
            height: self.height,
            cells: &self.cells,
        }
    }

    /// Plain characters of row `y` (colors dropped).
    pub fn row_text(&self, y: u16) -> String {
        self.snapshot().row_text(y)
    }
}

/// Borrowed, read-only view of a [`ScreenBuffer`].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    width: u16,
    height: u16,
    cells: &'a [Cell],
}

impl<'a> Snapshot<'a> {
    pub(crate) fn from_parts(width: u16, height: u16, cells: &'a [Cell]) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    pub fn row(&self, y: u16) -> &'a [Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.cells[start..start + w]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks((self.width as usize).max(1))
    }

    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count(buf: &ScreenBuffer, pred: impl Fn(Cell) -> bool) -> usize {
        buf.snapshot().cells().iter().filter(|c| pred(**c)).count()
    }

    #[test]
    fn test_new_and_clear_are_blank() {
        let mut buf = ScreenBuffer::new(10, 5);
        assert_eq!(count(&buf, |c| c == Cell::BLANK), 50);

        buf.draw_text(0, 0, "hello", Color::Red);
        buf.fill_rect(0, 1, 10, 4, '#', Color::Blue);
        buf.clear();
        assert_eq!(count(&buf, |c| c == Cell::BLANK), 50);
    }

    #[test]
    fn test_draw_text_writes_one_row() {
        let mut buf = ScreenBuffer::new(10, 5);
        buf.draw_text(2, 1, "hi", Color::Green);

        assert_eq!(buf.get(2, 1), Some(Cell::new('h', Color::Green)));
        assert_eq!(buf.get(3, 1), Some(Cell::new('i', Color::Green)));
        assert_eq!(count(&buf, |c| c == Cell::BLANK), 48);
    }

    #[test]
    fn test_draw_text_clips_right_and_left() {
        let mut buf = ScreenBuffer::new(5, 1);
        buf.draw_text(3, 0, "abcdef", Color::Default);
        assert_eq!(buf.row_text(0), "   ab");

        buf.clear();
        buf.draw_text(-2, 0, "abcdef", Color::Default);
        assert_eq!(buf.row_text(0), "cdef ");
    }

    #[test]
    fn test_nul_char_writes_blank() {
        let mut buf = ScreenBuffer::new(3, 1);
        buf.draw_char(1, 0, 'x', Color::Red);
        buf.draw_char(1, 0, '\0', Color::Red);
        assert_eq!(buf.get(1, 0), Some(Cell::new(' ', Color::Red)));
    }

    #[test]
    fn test_fill_rect_counts() {
        let mut buf = ScreenBuffer::new(10, 5);
        buf.fill_rect(0, 0, 3, 2, '#', Color::Default);
        assert_eq!(count(&buf, |c| c.ch == '#'), 6);
        assert_eq!(count(&buf, |c| c == Cell::BLANK), 44);
    }

    #[test]
    fn test_fill_rect_partially_outside() {
        let mut buf = ScreenBuffer::new(4, 4);
        buf.fill_rect(-1, -1, 3, 3, '#', Color::Default);
        assert_eq!(count(&buf, |c| c.ch == '#'), 4);
        buf.fill_rect(3, 3, -2, 5, '@', Color::Default);
        assert_eq!(count(&buf, |c| c.ch == '@'), 0);
    }

    #[test]
    fn test_box_border_cell_count() {
        let mut buf = ScreenBuffer::new(20, 10);
        buf.draw_box(2, 1, 8, 5, None, Color::Cyan);

        let border = count(&buf, |c| c.ch != ' ');
        assert_eq!(border, 2 * 8 + 2 * 5 - 4);
        assert_eq!(buf.get(2, 1).unwrap().ch, BOX_CORNER);
        assert_eq!(buf.get(9, 1).unwrap().ch, BOX_CORNER);
        assert_eq!(buf.get(2, 5).unwrap().ch, BOX_CORNER);
        assert_eq!(buf.get(9, 5).unwrap().ch, BOX_CORNER);
        assert_eq!(buf.get(5, 1).unwrap().ch, BOX_HORIZONTAL);
        assert_eq!(buf.get(5, 5).unwrap().ch, BOX_HORIZONTAL);
        assert_eq!(buf.get(2, 3).unwrap().ch, BOX_VERTICAL);
        assert_eq!(buf.get(9, 3).unwrap().ch, BOX_VERTICAL);
        // Interior untouched.
        assert_eq!(buf.get(5, 3), Some(Cell::BLANK));
    }

    #[test]
    fn test_box_title_is_centered_on_top_row() {
        let mut buf = ScreenBuffer::new(12, 4);
        buf.draw_box(0, 0, 12, 4, Some("Hi"), Color::Default);

        // " Hi " is 4 wide: (12 - 4) / 2 = 4.
        assert_eq!(buf.row_text(0), "+--- Hi ---+");
        assert_eq!(buf.row_text(1), "|          |");
        assert_eq!(buf.row_text(3), "+----------+");
    }

    #[test]
    fn test_box_odd_title_uses_floor_division() {
        let mut buf = ScreenBuffer::new(10, 3);
        buf.draw_box(0, 0, 10, 3, Some("abc"), Color::Default);
        // " abc " is 5 wide: (10 - 5) / 2 = 2.
        assert_eq!(buf.row_text(0), "+- abc --+");
    }

    #[test]
    fn test_empty_box_draws_nothing() {
        let mut buf = ScreenBuffer::new(5, 5);
        buf.draw_box(1, 1, 0, 3, Some("x"), Color::Default);
        buf.draw_box(1, 1, 3, -1, None, Color::Default);
        assert_eq!(count(&buf, |c| c == Cell::BLANK), 25);
    }

    #[test]
    fn test_lines() {
        let mut buf = ScreenBuffer::new(5, 5);
        buf.draw_hline(1, 0, 10, '-', Color::Default);
        buf.draw_vline(0, 1, 3, '|', Color::Default);
        assert_eq!(buf.row_text(0), " ----");
        assert_eq!(buf.row_text(3), "|    ");
        assert_eq!(buf.row_text(4), "     ");
    }

    #[test]
    fn test_later_writes_win() {
        let mut buf = ScreenBuffer::new(3, 1);
        buf.draw_char(0, 0, 'a', Color::Red);
        buf.draw_text(0, 0, "bc", Color::Blue);
        let snap = buf.snapshot();
        assert_eq!(snap.get(0, 0), Some(Cell::new('b', Color::Blue)));
        assert_eq!(snap.rows().count(), 1);
    }

    #[test]
    fn test_box_at_extreme_coordinates_clips() {
        let mut buf = ScreenBuffer::new(10, 5);
        buf.draw_box(i32::MAX - 1, 0, 5, 3, Some("far"), Color::Default);
        buf.draw_box(0, i32::MAX - 1, 5, 3, None, Color::Default);
        buf.draw_box(i32::MIN, i32::MIN, 5, 3, Some("far"), Color::Default);
        assert_eq!(count(&buf, |c| c == Cell::BLANK), 50);

        // Huge box anchored on screen: only the top-left corner area shows.
        buf.draw_box(0, 0, i32::MAX, i32::MAX, Some("big"), Color::Default);
        assert_eq!(buf.row_text(0), "+---------");
        assert_eq!(buf.row_text(4), "|         ");
    }

    #[test]
    fn test_huge_fill_is_clamped_to_buffer() {
        let mut buf = ScreenBuffer::new(10, 5);
        buf.fill_rect(0, 0, 2_000_000, 2_000, '#', Color::Default);
        assert_eq!(count(&buf, |c| c.ch == '#'), 50);

        buf.clear();
        buf.fill_rect(i32::MIN, i32::MIN, i32::MAX, i32::MAX, '#', Color::Default);
        assert_eq!(count(&buf, |c| c.ch == '#'), 0);
        buf.fill_rect(i32::MAX, 0, i32::MAX, 5, '#', Color::Default);
        assert_eq!(count(&buf, |c| c.ch == '#'), 0);
    }

    #[test]
    fn test_long_lines_and_text_are_clamped() {
        let mut buf = ScreenBuffer::new(5, 3);
        buf.draw_hline(i32::MIN, 0, i32::MAX, '-', Color::Default);
        buf.draw_vline(0, i32::MIN, i32::MAX, '|', Color::Default);
        assert_eq!(count(&buf, |c| c != Cell::BLANK), 0);

        buf.draw_hline(-3, 1, i32::MAX, '-', Color::Default);
        assert_eq!(buf.row_text(1), "-----");
        buf.draw_vline(4, i32::MAX, 10, '|', Color::Default);
        assert_eq!(buf.get(4, 2), Some(Cell::BLANK));

        let long = "x".repeat(10_000);
        buf.draw_text(-9_998, 2, &long, Color::Default);
        assert_eq!(buf.row_text(2), "xx   ");
        buf.draw_text(i32::MIN, 0, "abc", Color::Default);
        buf.draw_text(i32::MAX, 0, "abc", Color::Default);
        assert_eq!(buf.row_text(0), "     ");
    }

    #[test]
    fn test_center() {
        let buf = ScreenBuffer::new(11, 6);
        assert_eq!(buf.center_x(), 5);
        assert_eq!(buf.center_y(), 3);
    }

    proptest! {
        #[test]
        fn out_of_bounds_draw_char_is_ignored(
            x in -50i32..50,
            y in -50i32..50,
            ch in proptest::char::range('!', '~'),
        ) {
            prop_assume!(!(0..10).contains(&x) || !(0..5).contains(&y));
            let mut buf = ScreenBuffer::new(10, 5);
            let before = buf.clone();
            buf.draw_char(x, y, ch, Color::Red);
            prop_assert_eq!(buf, before);
        }
    }
}
