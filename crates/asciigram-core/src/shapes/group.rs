//! Ordered element stacks.

use super::{Drawable, Element};
use crate::hit::{HitRecorder, TaggedSurface};
use crate::surface::Surface;

/// An ordered, owning sequence of elements.
///
/// Later elements draw over earlier ones and win point hit tests. A stack is
/// itself drawable, which is how groups nest.
#[derive(Debug, Clone, Default)]
pub struct ElementStack {
    elements: Vec<Element>,
}

impl ElementStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Push an element on top and return its index.
    pub fn push(&mut self, element: impl Into<Element>) -> usize {
        self.elements.push(element.into());
        self.elements.len() - 1
    }

    /// Insert an element at `index`, shifting everything above it up.
    ///
    /// # Panics
    /// If `index > len`.
    pub fn insert(&mut self, index: usize, element: impl Into<Element>) {
        self.elements.insert(index, element.into());
    }

    /// Remove and return the element at `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Element {
        assert!(
            index < self.elements.len(),
            "remove index {index} out of range for stack of {}",
            self.elements.len()
        );
        self.elements.remove(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    /// The topmost element, if any.
    pub fn top(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// The topmost element.
    ///
    /// # Panics
    /// If the stack is empty.
    pub fn top_mut(&mut self) -> &mut Element {
        let Some(top) = self.elements.last_mut() else {
            panic!("top_mut called on an empty stack");
        };
        top
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }

    /// Draw every top-level element into `recorder`, tagged with its index.
    pub fn draw_tagged(&self, recorder: &mut dyn HitRecorder) {
        for (index, element) in self.elements.iter().enumerate() {
            let mut surface = TaggedSurface::new(&mut *recorder, index);
            element.draw(&mut surface);
        }
    }
}

impl Drawable for ElementStack {
    fn draw(&self, surface: &mut dyn Surface) {
        for element in &self.elements {
            element.draw(surface);
        }
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        for element in &mut self.elements {
            element.shift(dx, dy);
        }
    }
}

impl FromIterator<Element> for ElementStack {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter().collect())
    }
}
