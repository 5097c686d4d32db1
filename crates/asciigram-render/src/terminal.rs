//! Surface backed by a ratatui buffer.

use asciigram_core::Surface;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Draws glyphs straight into a terminal frame buffer.
///
/// Grid coordinates are buffer coordinates. Anything outside the buffer area
/// is clipped.
pub struct TerminalSurface<'a> {
    buffer: &'a mut Buffer,
    style: Style,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buffer: &'a mut Buffer) -> Self {
        Self {
            buffer,
            style: Style::default(),
        }
    }

    /// Style applied to every cell written from now on.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn area(&self) -> Rect {
        self.buffer.area
    }

    fn row_visible(&self, y: i32) -> bool {
        let area = self.area();
        i32::from(area.top()) <= y && y < i32::from(area.bottom())
    }

    /// Clip the inclusive column range to the buffer.
    fn clip_columns(&self, x1: i32, x2: i32) -> Option<(i32, i32)> {
        let area = self.area();
        let start = x1.max(i32::from(area.left()));
        let end = x2.min(i32::from(area.right()) - 1);
        (start <= end).then_some((start, end))
    }
}

impl Surface for TerminalSurface<'_> {
    fn plot(&mut self, glyph: char, x: i32, y: i32) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_char(glyph).set_style(self.style);
        }
    }

    fn plot_hline(&mut self, glyph: char, x1: i32, y: i32, x2: i32) {
        if !self.row_visible(y) {
            return;
        }
        let Some((start, end)) = self.clip_columns(x1, x2) else {
            return;
        };
        let run: String = std::iter::repeat_n(glyph, (end - start + 1) as usize).collect();
        self.buffer.set_string(start as u16, y as u16, run, self.style);
    }

    fn plot_text(&mut self, text: &str, x: i32, y: i32) {
        if !self.row_visible(y) {
            return;
        }
        let len = text.chars().count() as i32;
        let Some((start, end)) = self.clip_columns(x, x + len - 1) else {
            return;
        };
        // one cell per char, even for glyphs the terminal draws double width
        let visible = text.chars().skip((start - x) as usize);
        for (column, glyph) in (start..=end).zip(visible) {
            if let Some(cell) = self.buffer.cell_mut((column as u16, y as u16)) {
                cell.set_char(glyph).set_style(self.style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigram_core::SurfaceExt;
    use ratatui::style::Modifier;

    fn symbol(buffer: &Buffer, x: u16, y: u16) -> &str {
        buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or("")
    }

    #[test]
    fn test_writes_outside_are_clipped() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 2));
        let mut surface = TerminalSurface::new(&mut buffer);
        surface.set('x', -1, 0);
        surface.set('x', 4, 0);
        surface.set('x', 0, 2);
        surface.line_horizontal('-', -3, 1, 10);
        surface.line_vertical('|', 2, -5, 5);
        surface.write_text("abcdef", -2, 0);

        assert_eq!(symbol(&buffer, 0, 0), "c");
        assert_eq!(symbol(&buffer, 1, 0), "d");
        assert_eq!(symbol(&buffer, 2, 0), "e");
        assert_eq!(symbol(&buffer, 3, 0), "f");
        assert_eq!(symbol(&buffer, 0, 1), "-");
        assert_eq!(symbol(&buffer, 2, 1), "|");
        assert_eq!(symbol(&buffer, 3, 1), "-");
    }

    #[test]
    fn test_style_is_applied() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 3, 1));
        let style = Style::default().add_modifier(Modifier::BOLD);
        TerminalSurface::new(&mut buffer)
            .with_style(style)
            .line_horizontal('=', 0, 0, 1);
        let cell = buffer.cell((1, 0)).unwrap();
        assert!(cell.modifier.contains(Modifier::BOLD));
        assert_eq!(symbol(&buffer, 2, 0), " ");
    }

    #[test]
    fn test_wide_glyphs_keep_grid_columns() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 6, 1));
        TerminalSurface::new(&mut buffer).write_text("日本x", 0, 0);
        assert_eq!(symbol(&buffer, 0, 0), "日");
        assert_eq!(symbol(&buffer, 1, 0), "本");
        assert_eq!(symbol(&buffer, 2, 0), "x");
        assert_eq!(symbol(&buffer, 3, 0), " ");
    }

    #[test]
    fn test_offset_area() {
        let mut buffer = Buffer::empty(Rect::new(2, 1, 3, 3));
        let mut surface = TerminalSurface::new(&mut buffer);
        surface.write_text("xyz", 0, 1);
        surface.set('o', 4, 3);
        assert_eq!(symbol(&buffer, 2, 1), "z");
        assert_eq!(symbol(&buffer, 4, 3), "o");
    }
}
