//! Drawing surfaces.
//!
//! A [`Surface`] is anything that can receive glyphs on the character grid:
//! the terminal, a plain-text export buffer, or a hit-test recorder. Only
//! [`Surface::plot`] is required; the bulk primitives decompose into it unless
//! a backend overrides them.
//!
//! Callers never use the primitives directly. They go through [`SurfaceExt`],
//! which drops transparent glyphs and empty text and puts endpoints in order
//! before anything reaches the backend.

mod sparse;
mod text;

pub use sparse::SparseGrid;
pub use text::PlainTextSurface;

use crate::shapes::Drawable;

/// Glyph meaning "leave whatever is already there".
pub const TRANSPARENT: char = '\0';

/// Glyph that renders as an empty cell.
pub const BLANK: char = ' ';

/// A target for draw primitives.
///
/// Implementations may assume that every glyph passed in is not
/// [`TRANSPARENT`], that ranges are ordered (`x1 <= x2`, `y1 <= y2`) and that
/// text is non-empty and free of control characters.
pub trait Surface {
    /// Write one cell.
    fn plot(&mut self, glyph: char, x: i32, y: i32);

    /// Write the inclusive vertical run `(x, y1)..=(x, y2)`.
    fn plot_vline(&mut self, glyph: char, x: i32, y1: i32, y2: i32) {
        for y in y1..=y2 {
            self.plot(glyph, x, y);
        }
    }

    /// Write the inclusive horizontal run `(x1, y)..=(x2, y)`.
    fn plot_hline(&mut self, glyph: char, x1: i32, y: i32, x2: i32) {
        for x in x1..=x2 {
            self.plot(glyph, x, y);
        }
    }

    /// Fill the inclusive rectangle `(x1, y1)..=(x2, y2)`.
    fn plot_rect(&mut self, glyph: char, x1: i32, y1: i32, x2: i32, y2: i32) {
        for y in y1..=y2 {
            self.plot_hline(glyph, x1, y, x2);
        }
    }

    /// Write `text` starting at `(x, y)`, one column per `char`.
    fn plot_text(&mut self, text: &str, x: i32, y: i32) {
        for (col, glyph) in (x..).zip(text.chars()) {
            self.plot(glyph, col, y);
        }
    }
}

/// Guarded entry points for every [`Surface`].
pub trait SurfaceExt: Surface {
    /// Set one cell; transparent glyphs are a no-op.
    fn set(&mut self, glyph: char, x: i32, y: i32) {
        if glyph != TRANSPARENT {
            self.plot(glyph, x, y);
        }
    }

    /// Vertical run between `y1` and `y2` inclusive, in either order.
    fn line_vertical(&mut self, glyph: char, x: i32, y1: i32, y2: i32) {
        if glyph != TRANSPARENT {
            self.plot_vline(glyph, x, y1.min(y2), y1.max(y2));
        }
    }

    /// Horizontal run between `x1` and `x2` inclusive, in either order.
    fn line_horizontal(&mut self, glyph: char, x1: i32, y: i32, x2: i32) {
        if glyph != TRANSPARENT {
            self.plot_hline(glyph, x1.min(x2), y, x1.max(x2));
        }
    }

    /// Fill the rectangle spanned by two opposite corners.
    fn fill(&mut self, glyph: char, x1: i32, y1: i32, x2: i32, y2: i32) {
        if glyph != TRANSPARENT {
            self.plot_rect(glyph, x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2));
        }
    }

    /// Write a single line of text. Callers split on `'\n'` first.
    fn write_text(&mut self, text: &str, x: i32, y: i32) {
        if !text.is_empty() {
            self.plot_text(text, x, y);
        }
    }

    /// Draw an element onto this surface.
    fn draw(&mut self, drawable: &dyn Drawable)
    where
        Self: Sized,
    {
        drawable.draw(self);
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every primitive call so the dispatch can be inspected.
    #[derive(Default)]
    struct CallLog {
        calls: Vec<String>,
    }

    impl Surface for CallLog {
        fn plot(&mut self, glyph: char, x: i32, y: i32) {
            self.calls.push(format!("plot {glyph} {x} {y}"));
        }

        fn plot_hline(&mut self, glyph: char, x1: i32, y: i32, x2: i32) {
            self.calls.push(format!("hline {glyph} {x1} {y} {x2}"));
        }
    }

    #[test]
    fn test_transparent_is_dropped_before_dispatch() {
        let mut log = CallLog::default();
        log.set(TRANSPARENT, 1, 1);
        log.line_horizontal(TRANSPARENT, 0, 0, 5);
        log.line_vertical(TRANSPARENT, 0, 0, 5);
        log.fill(TRANSPARENT, 0, 0, 5, 5);
        log.write_text("", 0, 0);
        assert!(log.calls.is_empty());
    }

    #[test]
    fn test_endpoints_are_normalized() {
        let mut log = CallLog::default();
        log.line_horizontal('-', 5, 2, 3);
        assert_eq!(log.calls, vec!["hline - 3 2 5"]);

        log.calls.clear();
        log.line_vertical('|', 7, 4, 2);
        assert_eq!(log.calls, vec!["plot | 7 2", "plot | 7 3", "plot | 7 4"]);
    }

    #[test]
    fn test_fill_uses_overridden_hline() {
        let mut log = CallLog::default();
        log.fill('#', 4, 3, 1, 2);
        assert_eq!(log.calls, vec!["hline # 1 2 4", "hline # 1 3 4"]);
    }

    #[test]
    fn test_text_advances_one_column_per_char() {
        let mut log = CallLog::default();
        log.write_text("ab", -1, 0);
        assert_eq!(log.calls, vec!["plot a -1 0", "plot b 0 0"]);
    }
}
