//! Diagram elements.

mod arrow;
mod box_shape;
mod group;
mod text;

pub use arrow::{Arrow, Orientation, Segment};
pub use box_shape::BoxShape;
pub use group::ElementStack;
pub use text::Text;

use crate::surface::Surface;

/// Common trait for everything that can be put on the grid.
///
/// Drawing must be idempotent: drawing the same unchanged element twice leaves
/// a grid surface exactly as drawing it once.
///
/// Duplication is not part of the trait. Every element type and [`Element`]
/// derive `Clone`, which copies geometry and shares the style handle.
pub trait Drawable {
    /// Draw onto a surface.
    fn draw(&self, surface: &mut dyn Surface);

    /// Translate all geometry by `(dx, dy)`.
    fn shift(&mut self, dx: i32, dy: i32);
}

/// Enum wrapper for all element types.
///
/// Cloning copies geometry and shares styles.
#[derive(Debug, Clone)]
pub enum Element {
    Box(BoxShape),
    Arrow(Arrow),
    Text(Text),
    Group(ElementStack),
}

impl Element {
    /// Short name of the variant, for status messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Box(_) => "box",
            Element::Arrow(_) => "arrow",
            Element::Text(_) => "text",
            Element::Group(_) => "group",
        }
    }

    pub fn as_box_mut(&mut self) -> Option<&mut BoxShape> {
        match self {
            Element::Box(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_arrow_mut(&mut self) -> Option<&mut Arrow> {
        match self {
            Element::Arrow(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Check if this element is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Element::Group(_))
    }

    /// Get the group if this element is a group.
    pub fn as_group(&self) -> Option<&ElementStack> {
        match self {
            Element::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl Drawable for Element {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Element::Box(s) => s.draw(surface),
            Element::Arrow(s) => s.draw(surface),
            Element::Text(s) => s.draw(surface),
            Element::Group(s) => s.draw(surface),
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        match self {
            Element::Box(s) => s.shift(dx, dy),
            Element::Arrow(s) => s.shift(dx, dy),
            Element::Text(s) => s.shift(dx, dy),
            Element::Group(s) => s.shift(dx, dy),
        }
    }
}

impl From<BoxShape> for Element {
    fn from(shape: BoxShape) -> Self {
        Element::Box(shape)
    }
}

impl From<Arrow> for Element {
    fn from(shape: Arrow) -> Self {
        Element::Arrow(shape)
    }
}

impl From<Text> for Element {
    fn from(shape: Text) -> Self {
        Element::Text(shape)
    }
}

impl From<ElementStack> for Element {
    fn from(group: ElementStack) -> Self {
        Element::Group(group)
    }
}
