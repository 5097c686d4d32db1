//! Frame rendering.

use asciigram_core::{Drawable, ElementStack, Point, Surface};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use thiserror::Error;

use crate::terminal::TerminalSurface;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Extra drawing done after the document, such as pop-ups.
pub type Overlay<'a> = &'a dyn Fn(&mut dyn Surface);

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The document to render.
    pub document: &'a ElementStack,
    /// Cursor position in grid coordinates.
    pub cursor: Point,
    /// Name of the active mode, shown in the status bar.
    pub mode_label: &'a str,
    /// Highlighted region (inclusive corners, any order).
    pub selection: Option<(Point, Point)>,
    /// Last status message.
    pub status_message: &'a str,
    /// Whether row 0 shows the status bar.
    pub show_status_bar: bool,
    /// Drawn on top of the document and selection.
    pub overlay: Option<Overlay<'a>>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(document: &'a ElementStack, cursor: Point) -> Self {
        Self {
            document,
            cursor,
            mode_label: "",
            selection: None,
            status_message: "",
            show_status_bar: true,
            overlay: None,
        }
    }

    pub fn with_mode_label(mut self, label: &'a str) -> Self {
        self.mode_label = label;
        self
    }

    /// Set the selection rectangle.
    pub fn with_selection(mut self, selection: Option<(Point, Point)>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_status_message(mut self, message: &'a str) -> Self {
        self.status_message = message;
        self
    }

    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    pub fn with_overlay(mut self, overlay: Overlay<'a>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Status bar text: element under the cursor (1-based, 0 for none),
    /// element count, mode and the last message.
    pub fn status_line(&self) -> String {
        let here = self
            .document
            .element_at(self.cursor)
            .map_or(0, |index| index + 1);
        let mut line = format!("{here}/{} -- {} --", self.document.len(), self.mode_label);
        if !self.status_message.is_empty() {
            line.push_str("  ");
            line.push_str(self.status_message);
        }
        line
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Draw everything except the terminal cursor into `buffer`.
    fn render(&mut self, ctx: &RenderContext, buffer: &mut Buffer);

    /// Draw a whole frame and place the terminal cursor.
    fn draw(&mut self, frame: &mut Frame<'_>, ctx: &RenderContext) {
        self.render(ctx, frame.buffer_mut());
        let area = frame.area();
        if let Some(position) = cursor_position(ctx.cursor, area) {
            frame.set_cursor_position(position);
        }
    }
}

/// Terminal position of a grid point, if it is inside `area`.
fn cursor_position(cursor: Point, area: Rect) -> Option<Position> {
    let x = u16::try_from(cursor.x).ok()?;
    let y = u16::try_from(cursor.y).ok()?;
    let position = Position::new(x, y);
    area.contains(position).then_some(position)
}

/// Renderer drawing onto the terminal character grid.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    pub selection_style: Style,
    pub status_style: Style,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            selection_style: Style::default().add_modifier(Modifier::REVERSED),
            status_style: Style::default().fg(Color::Black).bg(Color::Green),
        }
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn highlight(&self, buffer: &mut Buffer, a: Point, b: Point) {
        let (min, max) = Point::bounds(a, b);
        let area = buffer.area;
        let left = min.x.max(i32::from(area.left()));
        let top = min.y.max(i32::from(area.top()));
        let right = max.x.min(i32::from(area.right()) - 1);
        let bottom = max.y.min(i32::from(area.bottom()) - 1);
        if left > right || top > bottom {
            return;
        }
        let rect = Rect::new(
            left as u16,
            top as u16,
            (right - left + 1) as u16,
            (bottom - top + 1) as u16,
        );
        buffer.set_style(rect, self.selection_style);
    }

    fn status_bar(&self, ctx: &RenderContext, buffer: &mut Buffer) {
        let area = buffer.area;
        if area.height == 0 {
            return;
        }
        let row = Rect::new(area.x, area.y, area.width, 1);
        Paragraph::new(Line::from(Span::raw(format!(" {}", ctx.status_line()))))
            .style(self.status_style)
            .render(row, buffer);
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, ctx: &RenderContext, buffer: &mut Buffer) {
        ctx.document.draw(&mut TerminalSurface::new(buffer));

        if let Some((a, b)) = ctx.selection {
            self.highlight(buffer, a, b);
        }

        if let Some(overlay) = ctx.overlay {
            overlay(&mut TerminalSurface::new(buffer));
        }

        if ctx.show_status_bar {
            self.status_bar(ctx, buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigram_core::{BoxShape, BoxStyle, SurfaceExt, Text, share};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn row(buffer: &Buffer, y: u16) -> String {
        (buffer.area.left()..buffer.area.right())
            .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect()
    }

    fn document() -> ElementStack {
        let mut doc = ElementStack::new();
        doc.push(BoxShape::new(
            Point::new(1, 1),
            Point::new(4, 3),
            share(BoxStyle::default()),
        ));
        doc.push(Text::with_content(Point::new(6, 2), "hi"));
        doc
    }

    #[test]
    fn test_status_line_counts_from_one() {
        let doc = document();
        let ctx = RenderContext::new(&doc, Point::new(6, 2)).with_mode_label("Normal");
        assert_eq!(ctx.status_line(), "2/2 -- Normal --");

        let ctx = RenderContext::new(&doc, Point::new(0, 5))
            .with_mode_label("Box")
            .with_status_message("copied");
        assert_eq!(ctx.status_line(), "0/2 -- Box --  copied");
    }

    #[test]
    fn test_render_document_and_status_bar() {
        let doc = document();
        let ctx = RenderContext::new(&doc, Point::new(1, 1)).with_mode_label("Normal");
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 4));
        TerminalRenderer::new().render(&ctx, &mut buffer);

        assert_eq!(row(&buffer, 0), " 1/2 -- No");
        assert_eq!(row(&buffer, 1), " .--.     ");
        assert_eq!(row(&buffer, 2), " |  | hi  ");
        assert_eq!(row(&buffer, 3), " '--'     ");
        assert_eq!(buffer.cell((0, 0)).unwrap().bg, Color::Green);
    }

    #[test]
    fn test_hidden_status_bar_leaves_row_zero() {
        let mut doc = ElementStack::new();
        doc.push(Text::with_content(Point::new(0, 0), "top"));
        let ctx = RenderContext::new(&doc, Point::ZERO).with_status_bar(false);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 5, 1));
        TerminalRenderer::new().render(&ctx, &mut buffer);
        assert_eq!(row(&buffer, 0), "top  ");
    }

    #[test]
    fn test_selection_is_reversed_and_clipped() {
        let doc = document();
        let ctx = RenderContext::new(&doc, Point::ZERO)
            .with_status_bar(false)
            .with_selection(Some((Point::new(12, 2), Point::new(8, 1))));
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 4));
        TerminalRenderer::new().render(&ctx, &mut buffer);

        let reversed = |x: u16, y: u16| {
            buffer
                .cell((x, y))
                .is_some_and(|cell| cell.modifier.contains(Modifier::REVERSED))
        };
        assert!(reversed(8, 1));
        assert!(reversed(9, 2));
        assert!(!reversed(7, 1));
        assert!(!reversed(8, 3));
    }

    #[test]
    fn test_overlay_draws_over_document() {
        let doc = document();
        let overlay = |surface: &mut dyn Surface| surface.write_text("XX", 1, 1);
        let ctx = RenderContext::new(&doc, Point::ZERO)
            .with_status_bar(false)
            .with_overlay(&overlay);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 4));
        TerminalRenderer::new().render(&ctx, &mut buffer);
        assert_eq!(row(&buffer, 1), " XX-.     ");
    }

    #[test]
    fn test_draw_places_cursor() {
        let doc = document();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut renderer = TerminalRenderer::new();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&doc, Point::new(3, 2));
                renderer.draw(frame, &ctx);
            })
            .unwrap();
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(3, 2)
        );
    }

    #[test]
    fn test_cursor_outside_area_is_not_placed() {
        let area = Rect::new(0, 0, 5, 5);
        assert_eq!(cursor_position(Point::new(-1, 2), area), None);
        assert_eq!(cursor_position(Point::new(5, 2), area), None);
        assert_eq!(
            cursor_position(Point::new(4, 4), area),
            Some(Position::new(4, 4))
        );
    }
}
