//! Rectangular region selection.

use asciigram_core::Point;
use crossterm::event::KeyEvent;

use super::{Flow, Layer, Mode, Request, typed_char};
use crate::editor::Editor;

/// Selects the rectangle between an anchor and the cursor. Every element
/// touching the rectangle is part of the selection.
#[derive(Debug)]
pub struct VisualMode {
    anchor: Point,
}

impl VisualMode {
    pub fn new(editor: &mut Editor) -> Self {
        editor.selection = Some((editor.cursor, editor.cursor));
        Self {
            anchor: editor.cursor,
        }
    }
}

impl Layer for VisualMode {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        let Some(c) = typed_char(&key) else {
            return Flow::Propagate;
        };
        let (anchor, cursor) = (self.anchor, editor.cursor);
        match c {
            'v' => editor.request(Request::SetMode(Mode::Normal)),
            'o' => {
                self.anchor = cursor;
                editor.cursor = anchor;
            }
            'O' => {
                self.anchor.x = cursor.x;
                editor.cursor.x = anchor.x;
            }
            'g' => {
                editor.group_region(anchor, cursor);
                editor.request(Request::SetMode(Mode::Normal));
            }
            'x' => {
                editor.delete_region(anchor, cursor);
                editor.request(Request::SetMode(Mode::Normal));
            }
            'c' => editor.copy_region(anchor, cursor),
            'y' => editor.yank_region(anchor, cursor),
            _ => return Flow::Propagate,
        }
        Flow::Stop
    }

    fn frame(&mut self, editor: &mut Editor) {
        editor.selection = Some((self.anchor, editor.cursor));
    }

    fn exit(&mut self, editor: &mut Editor) {
        editor.selection = None;
    }
}
