//! Free-standing text.

use super::Drawable;
use crate::point::Point;
use crate::surface::{Surface, SurfaceExt};

/// Left-aligned text anchored at its top-left cell.
///
/// `'\n'` starts a new row at the anchor column; there is no wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub position: Point,
    pub content: String,
}

impl Text {
    /// Create an empty text.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            content: String::new(),
        }
    }

    pub fn with_content(position: Point, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn push(&mut self, ch: char) {
        self.content.push(ch);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.content.pop()
    }

    /// Rows of the text, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Cell just after the last character, where typing continues.
    pub fn cursor(&self) -> Point {
        let (row, last) = self
            .lines()
            .enumerate()
            .last()
            .unwrap_or((0, ""));
        Point::new(
            self.position.x + last.chars().count() as i32,
            self.position.y + row as i32,
        )
    }
}

impl Drawable for Text {
    fn draw(&self, surface: &mut dyn Surface) {
        for (row, line) in (self.position.y..).zip(self.lines()) {
            surface.write_text(line, self.position.x, row);
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        self.position.shift(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SparseGrid;

    #[test]
    fn test_multiline_layout() {
        let text = Text::with_content(Point::new(0, 0), "ab\ncd");
        let mut grid = SparseGrid::new();
        text.draw(&mut grid);
        assert_eq!(grid.get(0, 0), Some('a'));
        assert_eq!(grid.get(1, 0), Some('b'));
        assert_eq!(grid.get(0, 1), Some('c'));
        assert_eq!(grid.get(1, 1), Some('d'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn test_blank_line_writes_nothing() {
        let text = Text::with_content(Point::new(3, 1), "x\n\ny");
        let mut grid = SparseGrid::new();
        text.draw(&mut grid);
        assert_eq!(grid.render(), "x\n\ny\n");
        assert_eq!(grid.get(3, 3), Some('y'));
    }

    #[test]
    fn test_cursor_follows_content() {
        let mut text = Text::new(Point::new(4, 2));
        assert_eq!(text.cursor(), Point::new(4, 2));
        text.push('h');
        text.push('i');
        assert_eq!(text.cursor(), Point::new(6, 2));
        text.push('\n');
        assert_eq!(text.cursor(), Point::new(4, 3));
        assert_eq!(text.pop(), Some('\n'));
        assert_eq!(text.cursor(), Point::new(6, 2));
    }
}
