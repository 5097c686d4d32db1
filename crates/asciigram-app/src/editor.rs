//! Editor state shared by every layer.

use std::collections::VecDeque;

use asciigram_core::{
    ArrowStyle, BoxStyle, Drawable, Element, ElementStack, Point, StyleSet,
};

use crate::clipboard::{ClipboardSink, MemoryClipboard, clipboard_for};
use crate::config::AppConfig;
use crate::layers::Request;
use crate::register::Register;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// The document plus everything the modes work on.
pub struct Editor {
    pub document: ElementStack,
    pub cursor: Point,
    pub box_styles: StyleSet<BoxStyle>,
    pub arrow_styles: StyleSet<ArrowStyle>,
    pub register: Register,
    /// Region highlighted by visual mode.
    pub selection: Option<(Point, Point)>,
    viewport: Viewport,
    show_status_bar: bool,
    clipboard: Box<dyn ClipboardSink>,
    status: String,
    requests: VecDeque<Request>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Box::new(MemoryClipboard::new()))
    }
}

impl Editor {
    pub fn new(clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            document: ElementStack::new(),
            cursor: Point::new(0, 1),
            box_styles: StyleSet::default(),
            arrow_styles: StyleSet::default(),
            register: Register::default(),
            selection: None,
            viewport: Viewport::default(),
            show_status_bar: true,
            clipboard,
            status: String::new(),
            requests: VecDeque::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut editor = Self::new(clipboard_for(config.system_clipboard));
        editor.box_styles = StyleSet::from_styles(config.box_styles.iter().cloned());
        editor.arrow_styles = StyleSet::from_styles(config.arrow_styles.iter().cloned());
        editor.show_status_bar = config.status_bar;
        editor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport {
            width: i32::from(width),
            height: i32::from(height),
        };
    }

    pub fn show_status_bar(&self) -> bool {
        self.show_status_bar
    }

    /// Keep the cursor on screen and off the status bar.
    pub fn clamp_cursor(&mut self) {
        let top = i32::from(self.show_status_bar);
        let bottom = (self.viewport.height - 1).max(top);
        let right = (self.viewport.width - 1).max(0);
        self.cursor.x = self.cursor.x.clamp(0, right);
        self.cursor.y = self.cursor.y.clamp(top, bottom);
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn request(&mut self, request: Request) {
        self.requests.push_back(request);
    }

    pub fn take_request(&mut self) -> Option<Request> {
        self.requests.pop_front()
    }

    /// Index of the topmost element under the cursor.
    pub fn here(&self) -> Option<usize> {
        self.document.element_at(self.cursor)
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor.shift(dx, dy);
    }

    /// Move every element and the cursor together.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.document.shift(dx, dy);
        self.cursor.shift(dx, dy);
    }

    /// Remove the element under the cursor into the register.
    pub fn cut(&mut self) {
        let Some(index) = self.here() else {
            return;
        };
        let element = self.document.remove(index);
        self.set_status(format!("Cut {}", element.kind()));
        self.register.store(element, self.cursor);
    }

    /// Copy the element under the cursor into the register.
    pub fn yank(&mut self) {
        let Some(element) = self.here().and_then(|index| self.document.get(index)) else {
            return;
        };
        let element = element.clone();
        self.set_status(format!("Yanked {}", element.kind()));
        self.register.store(element, self.cursor);
    }

    /// Paste the register on top, keeping its offset from the cursor.
    pub fn paste(&mut self) {
        let Some(element) = self.register.paste_at(self.cursor) else {
            self.set_status("Register is empty");
            return;
        };
        let index = self.document.push(element);
        log::debug!("Pasted element {index}");
    }

    pub fn raise_here(&mut self) {
        if let Some(index) = self.here() {
            self.document.raise(index);
        }
    }

    pub fn lower_here(&mut self) {
        if let Some(index) = self.here() {
            self.document.lower(index);
        }
    }

    /// Dissolve the group under the cursor.
    pub fn ungroup_here(&mut self) {
        let Some(index) = self.here() else {
            return;
        };
        match self.document.ungroup(index) {
            Some(range) => self.set_status(format!("Ungrouped {} elements", range.len())),
            None => self.set_status("Not a group"),
        }
    }

    /// Group everything touching the region.
    pub fn group_region(&mut self, a: Point, b: Point) {
        let indices = self.document.elements_in(a, b);
        match self.document.group(&indices) {
            Some(_) => self.set_status(format!("Grouped {} elements", indices.len())),
            None => self.set_status("Need at least 2 elements to group"),
        }
    }

    /// Delete everything touching the region.
    pub fn delete_region(&mut self, a: Point, b: Point) {
        let indices = self.document.elements_in(a, b);
        let removed = self.document.remove_many(&indices);
        self.set_status(format!("Deleted {} elements", removed.len()));
    }

    /// Copy everything touching the region into the register as one group.
    pub fn yank_region(&mut self, a: Point, b: Point) {
        let indices = self.document.elements_in(a, b);
        if indices.is_empty() {
            self.set_status("Nothing selected");
            return;
        }
        let group: ElementStack = indices
            .iter()
            .filter_map(|&index| self.document.get(index))
            .cloned()
            .collect();
        self.set_status(format!("Yanked {} elements", group.len()));
        self.register.store(Element::Group(group), self.cursor);
    }

    /// Export the region as text to the clipboard.
    pub fn copy_region(&mut self, a: Point, b: Point) {
        let text = self.document.export_region(a, b);
        let name = self.clipboard.name();
        match self.clipboard.copy(text) {
            Ok(()) => self.set_status(format!("Region sent to {name}")),
            Err(e) => {
                log::error!("Clipboard copy failed: {e}");
                self.set_status(format!("Copy failed: {e}"));
            }
        }
    }
}
