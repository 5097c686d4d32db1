//! Modes that create a new element and edit it while active.
//!
//! Each mode pushes its element on entry and remembers the index. If the
//! element disappears or changes type underneath it, the mode falls back to
//! normal mode.

use asciigram_core::{Arrow, BoxShape, Element, Orientation, Point, Text};
use crossterm::event::{KeyCode, KeyEvent};

use super::{Flow, Layer, Mode, Request, glyph_char, typed_char};
use crate::editor::Editor;

fn element(editor: &mut Editor, index: Option<usize>) -> Option<&mut Element> {
    index.and_then(|index| editor.document.get_mut(index))
}

fn vanished(editor: &mut Editor, index: &mut Option<usize>) {
    if index.take().is_some() {
        log::warn!("Element being edited vanished");
        editor.request(Request::SetMode(Mode::Normal));
    }
}

fn remove(editor: &mut Editor, index: &mut Option<usize>) {
    if let Some(index) = index.take().filter(|&index| index < editor.document.len()) {
        let element = editor.document.remove(index);
        log::debug!("Discarded {}", element.kind());
    }
}

/// Remove the element being edited and go back to normal mode.
fn discard(editor: &mut Editor, index: &mut Option<usize>) {
    remove(editor, index);
    editor.request(Request::SetMode(Mode::Normal));
}

/// Drags out a box. The second corner follows the cursor.
#[derive(Debug)]
pub struct BoxMode {
    index: Option<usize>,
}

impl BoxMode {
    pub fn new(editor: &mut Editor) -> Self {
        let shape = BoxShape::at(editor.cursor, editor.box_styles.current());
        Self {
            index: Some(editor.document.push(shape)),
        }
    }
}

impl Layer for BoxMode {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        let Some(c) = typed_char(&key) else {
            return Flow::Propagate;
        };
        match c {
            'x' => discard(editor, &mut self.index),
            'b' => editor.request(Request::SetMode(Mode::Normal)),
            'o' | 'O' => {
                let cursor = editor.cursor;
                let Some(shape) = element(editor, self.index).and_then(Element::as_box_mut) else {
                    return Flow::Propagate;
                };
                if c == 'o' {
                    shape.swap_corners();
                } else {
                    shape.swap_columns();
                }
                let end = shape.end;
                editor.cursor = if c == 'o' {
                    end
                } else {
                    Point::new(end.x, cursor.y)
                };
            }
            _ => return Flow::Propagate,
        }
        Flow::Stop
    }

    fn frame(&mut self, editor: &mut Editor) {
        let cursor = editor.cursor;
        match element(editor, self.index).and_then(Element::as_box_mut) {
            Some(shape) => shape.end = cursor,
            None => vanished(editor, &mut self.index),
        }
    }

    fn exit(&mut self, editor: &mut Editor) {
        if let Some(shape) = element(editor, self.index).and_then(Element::as_box_mut) {
            shape.normalize();
        }
    }
}

/// Types a text block. The cursor stays at the end of the text.
#[derive(Debug)]
pub struct InsertMode {
    index: Option<usize>,
}

impl InsertMode {
    pub fn new(editor: &mut Editor) -> Self {
        Self {
            index: Some(editor.document.push(Text::new(editor.cursor))),
        }
    }
}

impl Layer for InsertMode {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        let Some(text) = element(editor, self.index).and_then(Element::as_text_mut) else {
            return Flow::Propagate;
        };
        match (key.code, glyph_char(&key)) {
            (KeyCode::Enter, _) => text.push('\n'),
            (KeyCode::Backspace, _) => {
                text.pop();
            }
            (_, Some(c)) => text.push(c),
            _ => match typed_char(&key) {
                Some(c) if !c.is_control() => {
                    editor.set_status(format!("{c} does not fit one cell"));
                    return Flow::Stop;
                }
                _ => return Flow::Propagate,
            },
        }
        let cursor = text.cursor();
        editor.cursor = cursor;
        Flow::Stop
    }

    fn frame(&mut self, editor: &mut Editor) {
        if element(editor, self.index).and_then(Element::as_text_mut).is_none() {
            vanished(editor, &mut self.index);
        }
    }

    fn exit(&mut self, editor: &mut Editor) {
        let empty = element(editor, self.index)
            .and_then(Element::as_text_mut)
            .is_some_and(|text| text.is_empty());
        if empty {
            remove(editor, &mut self.index);
        }
    }
}

/// Draws an arrow through waypoints. The last waypoint follows the cursor.
#[derive(Debug)]
pub struct ArrowMode {
    index: Option<usize>,
}

impl ArrowMode {
    pub fn new(editor: &mut Editor) -> Self {
        let mut arrow = Arrow::new(editor.cursor, editor.arrow_styles.current());
        arrow.add_point(editor.cursor, Orientation::default());
        Self {
            index: Some(editor.document.push(arrow)),
        }
    }

    /// Drop the zero-length segment left by the finishing `a`. An arrow left
    /// without segments is removed.
    fn finish(&mut self, editor: &mut Editor) {
        let emptied = match element(editor, self.index).and_then(Element::as_arrow_mut) {
            Some(arrow) => {
                arrow.segments.pop();
                arrow.segments.is_empty()
            }
            None => false,
        };
        if emptied {
            discard(editor, &mut self.index);
        } else {
            editor.request(Request::SetMode(Mode::Normal));
        }
    }
}

impl Layer for ArrowMode {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        let Some(c) = typed_char(&key) else {
            return Flow::Propagate;
        };
        let cursor = editor.cursor;
        let Some(arrow) = element(editor, self.index).and_then(Element::as_arrow_mut) else {
            return Flow::Propagate;
        };
        match c {
            'x' => discard(editor, &mut self.index),
            'a' => {
                if arrow.second_last() == Some(cursor) {
                    self.finish(editor);
                } else {
                    arrow.add_point(cursor, Orientation::default());
                }
            }
            'o' => {
                if !arrow.segments.is_empty() {
                    arrow.flip_last();
                }
            }
            _ => return Flow::Propagate,
        }
        Flow::Stop
    }

    fn frame(&mut self, editor: &mut Editor) {
        let cursor = editor.cursor;
        match element(editor, self.index).and_then(Element::as_arrow_mut) {
            Some(arrow) if !arrow.segments.is_empty() => arrow.set_end(cursor),
            Some(_) => {}
            None => vanished(editor, &mut self.index),
        }
    }
}
