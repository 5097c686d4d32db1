//! Input layers.
//!
//! Key events travel from the top layer down until one stops them. Layer 0
//! is [`Universal`], layer 1 the current mode, anything above is a pop-up.
//! Layers never touch the stack directly; they queue [`Request`]s on the
//! editor, which the workspace applies once the event has been dispatched.

mod authoring;
mod help;
mod modes;
mod style_popup;
mod universal;
mod visual;
mod window;

pub use authoring::{ArrowMode, BoxMode, InsertMode};
pub use help::HelpLayer;
pub use modes::{Mode, MoveMode, NormalMode};
pub use style_popup::{EditorStyle, StylePopup};
pub use universal::Universal;
pub use visual::VisualMode;
pub use window::Window;

use asciigram_core::Surface;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use crate::editor::Editor;

/// Whether a key event continues to the layer below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Propagate,
    Stop,
}

/// Changes to the layer stack, applied after dispatch.
pub enum Request {
    /// Replace the mode layer.
    SetMode(Mode),
    /// Open a pop-up on top.
    Push(Box<dyn Layer>),
    /// Close the topmost pop-up.
    Pop,
    Quit,
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request::SetMode(mode) => f.debug_tuple("SetMode").field(mode).finish(),
            Request::Push(_) => f.write_str("Push"),
            Request::Pop => f.write_str("Pop"),
            Request::Quit => f.write_str("Quit"),
        }
    }
}

/// One layer of key handling and drawing.
pub trait Layer {
    /// Handle a key press.
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow;

    /// Runs bottom-up after every event, before rendering.
    fn frame(&mut self, _editor: &mut Editor) {}

    /// Draw on top of the document, bottom-up.
    fn post(&self, _editor: &Editor, _surface: &mut dyn Surface) {}

    /// Runs once when the layer is removed.
    fn exit(&mut self, _editor: &mut Editor) {}
}

/// The character typed by a key press without Ctrl or Alt.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}

/// A typed character that fills exactly one grid cell.
///
/// Control characters and glyphs a terminal draws zero or two columns wide
/// are refused, since elements place one char per column.
pub fn glyph_char(key: &KeyEvent) -> Option<char> {
    typed_char(key).filter(|&c| !c.is_control() && UnicodeWidthChar::width(c) == Some(1))
}

/// Ordered collection of layers.
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
}

impl LayerStack {
    /// Index of the mode layer.
    const MODE: usize = 1;

    pub fn new(universal: Box<dyn Layer>, mode: Box<dyn Layer>) -> Self {
        Self {
            layers: vec![universal, mode],
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of open pop-ups.
    pub fn popups(&self) -> usize {
        self.layers.len() - (Self::MODE + 1)
    }

    /// Dispatch a key from the top down. Returns true if no layer stopped it.
    pub fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> bool {
        self.layers
            .iter_mut()
            .rev()
            .all(|layer| layer.event(key, editor) == Flow::Propagate)
    }

    pub fn frame(&mut self, editor: &mut Editor) {
        for layer in &mut self.layers {
            layer.frame(editor);
        }
    }

    pub fn post(&self, editor: &Editor, surface: &mut dyn Surface) {
        for layer in &self.layers {
            layer.post(editor, surface);
        }
    }

    pub fn push(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer);
    }

    /// Close the topmost pop-up. The universal and mode layers stay.
    pub fn pop(&mut self, editor: &mut Editor) -> bool {
        if self.layers.len() <= Self::MODE + 1 {
            return false;
        }
        if let Some(mut layer) = self.layers.pop() {
            layer.exit(editor);
        }
        true
    }

    /// Swap in a new mode layer, letting the old one clean up first.
    pub fn replace_mode(&mut self, editor: &mut Editor, enter: impl FnOnce(&mut Editor) -> Box<dyn Layer>) {
        self.layers[Self::MODE].exit(editor);
        self.layers[Self::MODE] = enter(editor);
    }
}
