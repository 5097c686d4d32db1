//! Editing modes and the two simplest ones.

use asciigram_core::{ArrowStyle, BoxStyle, Drawable};
use crossterm::event::{KeyCode, KeyEvent};

use super::{
    ArrowMode, BoxMode, Flow, InsertMode, Layer, Request, StylePopup, VisualMode, typed_char,
};
use crate::editor::Editor;

/// The editing mode shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Move,
    Box,
    Insert,
    Arrow,
    Visual,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "Normal",
            Mode::Move => "Move",
            Mode::Box => "Box",
            Mode::Insert => "Insert",
            Mode::Arrow => "Arrow",
            Mode::Visual => "Visual",
        }
    }

    /// Build the layer for this mode, running its entry actions.
    pub fn enter(self, editor: &mut Editor) -> Box<dyn Layer> {
        match self {
            Mode::Normal => Box::new(NormalMode),
            Mode::Move => Box::new(MoveMode::new(editor)),
            Mode::Box => Box::new(BoxMode::new(editor)),
            Mode::Insert => Box::new(InsertMode::new(editor)),
            Mode::Arrow => Box::new(ArrowMode::new(editor)),
            Mode::Visual => Box::new(VisualMode::new(editor)),
        }
    }
}

/// Element operations and entry into the other modes.
#[derive(Debug, Default)]
pub struct NormalMode;

impl Layer for NormalMode {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        let Some(c) = typed_char(&key) else {
            return Flow::Propagate;
        };
        match c {
            'x' => editor.cut(),
            'y' => editor.yank(),
            'p' => editor.paste(),
            'v' => editor.request(Request::SetMode(Mode::Visual)),
            'b' => editor.request(Request::SetMode(Mode::Box)),
            'i' => editor.request(Request::SetMode(Mode::Insert)),
            'a' => editor.request(Request::SetMode(Mode::Arrow)),
            'm' => {
                if editor.here().is_some() {
                    editor.request(Request::SetMode(Mode::Move));
                }
            }
            's' => editor.request(Request::Push(Box::new(StylePopup::<BoxStyle>::new()))),
            'S' => editor.request(Request::Push(Box::new(StylePopup::<ArrowStyle>::new()))),
            '<' => editor.lower_here(),
            '>' => editor.raise_here(),
            'G' => editor.ungroup_here(),
            _ => return Flow::Propagate,
        }
        Flow::Stop
    }
}

/// Moves the element that was under the cursor on entry. The cursor moves
/// along with it.
#[derive(Debug)]
pub struct MoveMode {
    index: Option<usize>,
}

impl MoveMode {
    pub fn new(editor: &mut Editor) -> Self {
        let index = editor.here();
        if index.is_none() {
            editor.request(Request::SetMode(Mode::Normal));
        }
        Self { index }
    }
}

impl Layer for MoveMode {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        let (dx, dy) = match (key.code, typed_char(&key)) {
            (_, Some('m')) => {
                editor.request(Request::SetMode(Mode::Normal));
                return Flow::Stop;
            }
            (KeyCode::Left, _) | (_, Some('h')) => (-1, 0),
            (KeyCode::Down, _) | (_, Some('j')) => (0, 1),
            (KeyCode::Up, _) | (_, Some('k')) => (0, -1),
            (KeyCode::Right, _) | (_, Some('l')) => (1, 0),
            _ => return Flow::Propagate,
        };
        match self.index.and_then(|index| editor.document.get_mut(index)) {
            Some(element) => element.shift(dx, dy),
            None => editor.request(Request::SetMode(Mode::Normal)),
        }
        // universal moves the cursor
        Flow::Propagate
    }
}
