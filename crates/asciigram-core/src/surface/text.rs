//! Plain-text export of a rectangular region.

use super::{BLANK, Surface};
use crate::point::Point;

/// Renders an inclusive rectangle of the grid as plain text.
///
/// Coordinates are remapped so the rectangle's top-left corner becomes
/// `(0, 0)`. Anything drawn outside the rectangle is cropped.
#[derive(Debug, Clone)]
pub struct PlainTextSurface {
    /// Top-left corner.
    min: Point,
    /// Bottom-right corner.
    max: Point,
    lines: Vec<Vec<char>>,
}

/// Cells in the inclusive range `lo..=hi`, without overflowing at the ends
/// of the coordinate space.
fn span(lo: i32, hi: i32) -> usize {
    usize::try_from(i64::from(hi) - i64::from(lo) + 1).unwrap_or(usize::MAX)
}

impl PlainTextSurface {
    /// Create an export buffer for the rectangle spanned by two opposite
    /// corners, both inclusive.
    pub fn new(a: Point, b: Point) -> Self {
        let (min, max) = Point::bounds(a, b);
        Self {
            min,
            max,
            lines: vec![Vec::new(); span(min.y, max.y)],
        }
    }

    /// Width of the exported region in cells.
    pub fn width(&self) -> usize {
        span(self.min.x, self.max.x)
    }

    /// Height of the exported region in rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The rendered text, every row terminated by `'\n'`.
    ///
    /// Rows are only as long as their rightmost written cell.
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.extend(line.iter());
            out.push('\n');
        }
        out
    }
}

impl Surface for PlainTextSurface {
    fn plot(&mut self, glyph: char, x: i32, y: i32) {
        if x < self.min.x || self.max.x < x || y < self.min.y || self.max.y < y {
            return;
        }

        let col = span(self.min.x, x) - 1;
        let Some(line) = self.lines.get_mut(span(self.min.y, y) - 1) else {
            return;
        };
        if line.len() <= col {
            line.resize(col + 1, BLANK);
        }
        line[col] = glyph;
    }
}
