//! Rectangular boxes.

use super::Drawable;
use crate::point::Point;
use crate::style::{BoxStyle, StyleRef};
use crate::surface::{Surface, SurfaceExt};

/// A box spanned by two opposite corners.
///
/// The corners are kept in whatever order they were dragged out in; only
/// [`BoxShape::normalize`] puts `start` at the top-left.
#[derive(Debug, Clone)]
pub struct BoxShape {
    pub start: Point,
    pub end: Point,
    pub style: StyleRef<BoxStyle>,
}

impl BoxShape {
    pub fn new(start: Point, end: Point, style: StyleRef<BoxStyle>) -> Self {
        Self { start, end, style }
    }

    /// A single-cell box, the starting point when dragging one out.
    pub fn at(point: Point, style: StyleRef<BoxStyle>) -> Self {
        Self::new(point, point, style)
    }

    pub fn width(&self) -> i32 {
        (self.start.x - self.end.x).abs()
    }

    pub fn height(&self) -> i32 {
        (self.start.y - self.end.y).abs()
    }

    /// Reorder the corners so that `start <= end` componentwise.
    pub fn normalize(&mut self) {
        (self.start, self.end) = Point::bounds(self.start, self.end);
    }

    /// Swap to the diagonally opposite corner.
    pub fn swap_corners(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Swap to the opposite corner on the same row.
    pub fn swap_columns(&mut self) {
        std::mem::swap(&mut self.start.x, &mut self.end.x);
    }
}

impl Drawable for BoxShape {
    fn draw(&self, surface: &mut dyn Surface) {
        let (min, max) = Point::bounds(self.start, self.end);
        let style = self.style.borrow();

        surface.fill(style.fill, min.x, min.y, max.x, max.y);

        surface.line_horizontal(style.tside, min.x, min.y, max.x);
        surface.line_horizontal(style.bside, min.x, max.y, max.x);
        surface.line_vertical(style.lside, min.x, min.y, max.y);
        surface.line_vertical(style.rside, max.x, min.y, max.y);

        surface.set(style.tl, min.x, min.y);
        surface.set(style.tr, max.x, min.y);
        surface.set(style.bl, min.x, max.y);
        surface.set(style.br, max.x, max.y);
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        self.start.shift(dx, dy);
        self.end.shift(dx, dy);
    }
}
