//! Small math and text helpers.

use std::ops::Range;

use rand::Rng;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

pub fn manhattan_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> u64 {
    u64::from(x1.abs_diff(x2)) + u64::from(y1.abs_diff(y2))
}

/// -1, 0 or 1. NaN counts as 0.
pub fn sign(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Left-pad `text` so it sits centered in `width` columns. Text wider than
/// `width` is cut. The right side is not padded.
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let padding = (width - len) / 2;
    format!("{:padding$}{text}", "")
}

/// Greedy word wrap. Words longer than `width` get a line of their own and
/// are not split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Uniform cell in `xs x ys`. `None` when either range is empty.
pub fn random_position<R: Rng + ?Sized>(
    rng: &mut R,
    xs: Range<i32>,
    ys: Range<i32>,
) -> Option<(i32, i32)> {
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    Some((rng.random_range(xs), rng.random_range(ys)))
}

/// Like [`random_position`] but retries up to `max_attempts` times to avoid
/// `exclude`. After that the last draw is returned even if it collides.
pub fn random_position_excluding<R: Rng + ?Sized>(
    rng: &mut R,
    xs: Range<i32>,
    ys: Range<i32>,
    exclude: &[(i32, i32)],
    max_attempts: usize,
) -> Option<(i32, i32)> {
    for _ in 0..max_attempts {
        let pos = random_position(rng, xs.clone(), ys.clone())?;
        if !exclude.contains(&pos) {
            return Some(pos);
        }
    }
    random_position(rng, xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_position_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let (x, y) = random_position(&mut rng, 0..10, 0..10).unwrap();
            assert!((0..10).contains(&x));
            assert!((0..10).contains(&y));
        }
        assert_eq!(random_position(&mut rng, 3..3, 0..10), None);
    }

    #[test]
    fn test_random_position_excluding_finds_the_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let taken = [(0, 0), (1, 0), (0, 1)];
        for _ in 0..20 {
            assert_eq!(
                random_position_excluding(&mut rng, 0..2, 0..2, &taken, 200),
                Some((1, 1))
            );
        }
    }

    #[test]
    fn test_center_text() {
        assert_eq!(center_text("hi", 10), "    hi");
        assert_eq!(center_text("abc", 6), " abc");
        assert_eq!(center_text("too long", 3), "too");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_text("a enormousword b", 4), vec!["a", "enormousword", "b"]);
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert_eq!(manhattan_distance(5, 5, 5, 5), 0);
        assert_eq!(manhattan_distance(i32::MIN, 0, i32::MAX, 0), u64::from(u32::MAX));
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(10.0), 1);
        assert_eq!(sign(-10.0), -1);
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(f64::NAN), 0);
    }

    #[test]
    fn test_lerp_and_distance() {
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp(4.0, 8.0, 1.0), 8.0);
        assert!((distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-12);
    }
}
