//! Scrollable key binding reference.

use asciigram_core::{Point, Surface, SurfaceExt};
use crossterm::event::{KeyCode, KeyEvent};

use super::{Flow, Layer, Request, Window, typed_char};
use crate::editor::{Editor, Viewport};
use crate::shortcuts::ShortcutRegistry;

const HEADER: &str = "q/ESC/?: close help    j/down: scroll down    k/up: scroll up";

/// Rows taken by the frame, the header and the gap below it.
const CHROME_ROWS: i32 = 4;

/// Full-screen help pop-up.
#[derive(Debug)]
pub struct HelpLayer {
    /// First visible line.
    line: usize,
    lines: Vec<String>,
}

impl Default for HelpLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpLayer {
    pub fn new() -> Self {
        Self {
            line: 0,
            lines: ShortcutRegistry::help_lines(),
        }
    }

    fn window(viewport: Viewport) -> Window {
        let min = Point::new(2, 2);
        let max = Point::new(
            (viewport.width - 3).max(min.x + 2),
            (viewport.height - 2).max(min.y + CHROME_ROWS),
        );
        Window::new(min, max, " Help ")
    }

    fn visible_rows(viewport: Viewport) -> usize {
        let window = Self::window(viewport);
        (window.max.y - window.min.y - CHROME_ROWS + 1).max(1) as usize
    }

    fn max_line(&self, viewport: Viewport) -> usize {
        self.lines.len().saturating_sub(Self::visible_rows(viewport))
    }
}

fn truncated(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

impl Layer for HelpLayer {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        match (key.code, typed_char(&key)) {
            (KeyCode::Down, _) | (_, Some('j')) => {
                self.line = (self.line + 1).min(self.max_line(editor.viewport()));
            }
            (KeyCode::Up, _) | (_, Some('k')) => self.line = self.line.saturating_sub(1),
            (KeyCode::Esc, _) | (_, Some('q' | '?')) => editor.request(Request::Pop),
            _ => {}
        }
        Flow::Stop
    }

    fn post(&self, editor: &Editor, surface: &mut dyn Surface) {
        let viewport = editor.viewport();
        let window = Self::window(viewport);
        window.draw(surface);

        let width = window.inner_width().saturating_sub(2);
        let x = window.min.x + 2;
        surface.write_text(&truncated(HEADER, width), x, window.min.y + 1);
        let rows = Self::visible_rows(viewport);
        for (y, line) in (window.min.y + 3..).zip(self.lines.iter().skip(self.line).take(rows)) {
            surface.write_text(&truncated(line, width), x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigram_core::SparseGrid;
    use crossterm::event::KeyModifiers;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_is_capped() {
        let mut editor = Editor::default();
        editor.set_viewport(40, 12);
        let mut help = HelpLayer::new();
        let max = help.max_line(editor.viewport());
        assert!(max > 0);
        for _ in 0..500 {
            help.event(key('j'), &mut editor);
        }
        assert_eq!(help.line, max);
        help.event(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), &mut editor);
        assert_eq!(help.line, max - 1);
        for _ in 0..500 {
            help.event(key('k'), &mut editor);
        }
        assert_eq!(help.line, 0);
    }

    #[test]
    fn test_close_keys() {
        let mut editor = Editor::default();
        let mut help = HelpLayer::new();
        for c in ['q', '?'] {
            help.event(key(c), &mut editor);
            assert!(matches!(editor.take_request(), Some(Request::Pop)));
        }
        help.event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut editor);
        assert!(matches!(editor.take_request(), Some(Request::Pop)));
    }

    #[test]
    fn test_post_stays_inside_window() {
        let mut editor = Editor::default();
        editor.set_viewport(30, 10);
        let help = HelpLayer::new();
        let mut grid = SparseGrid::new();
        help.post(&editor, &mut grid);
        assert!(grid.cells().all(|(x, y, _)| (2..=27).contains(&x) && (2..=8).contains(&y)));
        assert_eq!(grid.get(4, 3), Some('q'));
        assert_eq!(grid.get(4, 5), Some('E'));
    }
}
