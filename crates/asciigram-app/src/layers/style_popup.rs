//! Pop-up for editing the glyphs of the current style.

use std::marker::PhantomData;

use asciigram_core::{ArrowStyle, BoxStyle, Point, StyleSet, StyleSlots, Surface, SurfaceExt, TRANSPARENT};
use crossterm::event::{KeyCode, KeyEvent};

use super::{Flow, Layer, Request, Window, glyph_char, typed_char};
use crate::editor::Editor;

/// Style kinds the editor keeps a set of.
pub trait EditorStyle: StyleSlots + Clone + Default + 'static {
    fn styles(editor: &Editor) -> &StyleSet<Self>;
    fn styles_mut(editor: &mut Editor) -> &mut StyleSet<Self>;
}

impl EditorStyle for BoxStyle {
    fn styles(editor: &Editor) -> &StyleSet<Self> {
        &editor.box_styles
    }

    fn styles_mut(editor: &mut Editor) -> &mut StyleSet<Self> {
        &mut editor.box_styles
    }
}

impl EditorStyle for ArrowStyle {
    fn styles(editor: &Editor) -> &StyleSet<Self> {
        &editor.arrow_styles
    }

    fn styles_mut(editor: &mut Editor) -> &mut StyleSet<Self> {
        &mut editor.arrow_styles
    }
}

/// Glyph shown in a slot while it waits for its new value.
const PREVIEW: char = '#';

/// Screen position of the pop-up's top-left corner.
const ORIGIN: Point = Point::new(10, 10);

/// Edits the current style of one set. Changes apply immediately to every
/// element using the style.
#[derive(Debug)]
pub struct StylePopup<T> {
    /// Picked slot label and the glyph it had.
    pending: Option<(char, char)>,
    marker: PhantomData<T>,
}

impl<T: EditorStyle> Default for StylePopup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EditorStyle> StylePopup<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            marker: PhantomData,
        }
    }

    fn set_slot(editor: &mut Editor, label: char, glyph: char) {
        let current = T::styles_mut(editor).current();
        let mut style = current.borrow_mut();
        if let Some(slot) = style.slot_mut(label) {
            *slot = glyph;
        }
    }

    fn pick(&mut self, editor: &mut Editor, label: char) {
        let current = T::styles_mut(editor).current();
        let mut style = current.borrow_mut();
        if let Some(slot) = style.slot_mut(label) {
            self.pending = Some((label, *slot));
            *slot = PREVIEW;
        }
    }

    fn window(count: usize) -> Window {
        let width = T::SLOTS.iter().map(|slot| slot.position.x).max().unwrap_or(0);
        let height = T::SLOTS.iter().map(|slot| slot.position.y).max().unwrap_or(0);
        let title = format!(" {} style [{count}] ", T::KIND);
        let span = (2 * width + 6).max(title.chars().count() as i32 + 3);
        Window::new(ORIGIN, Point::new(ORIGIN.x + span, ORIGIN.y + height + 1), title)
    }
}

impl<T: EditorStyle> Layer for StylePopup<T> {
    fn event(&mut self, key: KeyEvent, editor: &mut Editor) -> Flow {
        if let Some((label, original)) = self.pending.take() {
            let glyph = match (key.code, glyph_char(&key)) {
                (KeyCode::Backspace, _) => TRANSPARENT,
                (_, Some(c)) => c,
                _ => original,
            };
            Self::set_slot(editor, label, glyph);
            log::debug!("{} slot {label} set to {glyph:?}", T::KIND);
            return Flow::Stop;
        }
        match (key.code, typed_char(&key)) {
            (KeyCode::Esc, _) | (_, Some('q' | 's')) => editor.request(Request::Pop),
            (_, Some('+')) => {
                T::styles_mut(editor).duplicate_current();
                editor.set_status(format!("New {} style", T::KIND.to_lowercase()));
            }
            (_, Some(']')) => T::styles_mut(editor).next(),
            (_, Some('[')) => T::styles_mut(editor).prev(),
            (_, Some(c)) => self.pick(editor, c),
            _ => {}
        }
        // modal: nothing reaches the layers below
        Flow::Stop
    }

    fn post(&self, editor: &Editor, surface: &mut dyn Surface) {
        let styles = T::styles(editor);
        let window = Self::window(styles.len());
        window.draw(surface);

        let width = T::SLOTS.iter().map(|slot| slot.position.x).max().unwrap_or(0);
        let left = window.min.x + 1;
        let current = styles.current();
        let style = current.borrow();
        for slot in T::SLOTS {
            let y = window.min.y + slot.position.y;
            surface.set(slot.label, left + slot.position.x, y);
            if let Some(glyph) = style.slot(slot.label) {
                surface.set(glyph, left + width + 3 + slot.position.x, y);
            }
        }
    }

    fn exit(&mut self, editor: &mut Editor) {
        if let Some((label, original)) = self.pending.take() {
            Self::set_slot(editor, label, original);
        }
    }
}
