use crate::types::Color;

/// Multi-line ASCII art drawn with a single color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sprite {
    pub lines: Vec<String>,
    pub color: Color,
}

impl Sprite {
    pub fn new(lines: Vec<String>, color: Color) -> Self {
        Self { lines, color }
    }

    /// Build a sprite from a block of text. Blank lines at either end are
    /// dropped so raw string literals can start on their own line.
    pub fn from_string(art: &str, color: Color) -> Self {
        let lines = art
            .trim_matches('\n')
            .split('\n')
            .map(str::to_owned)
            .collect();
        Self { lines, color }
    }

    pub fn from_char(ch: char, color: Color) -> Self {
        Self {
            lines: vec![ch.to_string()],
            color,
        }
    }

    /// Width of the longest line, in characters.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        let sprite = Sprite::from_char('@', Color::Default);
        assert_eq!((sprite.width(), sprite.height()), (1, 1));
        assert_eq!(sprite.lines, vec!["@".to_string()]);
    }

    #[test]
    fn test_from_string_trims_outer_newlines() {
        let art = "
###
# #
###
";
        let sprite = Sprite::from_string(art, Color::Yellow);
        assert_eq!((sprite.width(), sprite.height()), (3, 3));
        assert_eq!(sprite.lines[1], "# #");
        assert_eq!(sprite.color, Color::Yellow);
    }

    #[test]
    fn test_width_is_longest_line() {
        let sprite = Sprite::from_string(" /\\\n/__\\\n |", Color::Default);
        assert_eq!(sprite.width(), 4);
        assert_eq!(sprite.height(), 3);
        assert_eq!(Sprite::default().width(), 0);
    }
}
