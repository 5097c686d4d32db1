//! Bindings available in every mode.

use crossterm::event::{KeyCode, KeyEvent};

use super::{Flow, HelpLayer, Layer, Mode, Request, typed_char};
use crate::editor::Editor;

/// Bottom layer: cursor movement, scrolling, help and quit.
#[derive(Debug, Default)]
pub struct Universal;

impl Layer for Universal {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        match key.code {
            KeyCode::Esc => editor.request(Request::SetMode(Mode::Normal)),
            KeyCode::Left => editor.move_cursor(-1, 0),
            KeyCode::Down => editor.move_cursor(0, 1),
            KeyCode::Up => editor.move_cursor(0, -1),
            KeyCode::Right => editor.move_cursor(1, 0),
            _ => match typed_char(&key) {
                Some('?') => editor.request(Request::Push(Box::new(HelpLayer::new()))),
                Some('h') => editor.move_cursor(-1, 0),
                Some('j') => editor.move_cursor(0, 1),
                Some('k') => editor.move_cursor(0, -1),
                Some('l') => editor.move_cursor(1, 0),
                // scrolling moves the document the opposite way
                Some('H') => editor.scroll(1, 0),
                Some('J') => editor.scroll(0, -1),
                Some('K') => editor.scroll(0, 1),
                Some('L') => editor.scroll(-1, 0),
                Some('q') => editor.request(Request::Quit),
                _ => {
                    log::trace!("Unbound key {:?}", key.code);
                    return Flow::Propagate;
                }
            },
        }
        Flow::Stop
    }
}
