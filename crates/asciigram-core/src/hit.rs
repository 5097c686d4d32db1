//! Hit testing by replaying draws.
//!
//! Nothing keeps a spatial index of the document. To find what sits under a
//! cell, the stack is drawn into a recorder through a [`TaggedSurface`] per
//! element, and the recorder notes which element index touched which cell.

use std::collections::BTreeSet;

use crate::point::Point;
use crate::surface::Surface;

/// Receives the cells touched while drawing the element at `index`.
pub trait HitRecorder {
    fn record(&mut self, index: usize, x: i32, y: i32);
}

/// A surface that forwards every written cell to a recorder, tagged with the
/// index of the element currently being drawn.
pub struct TaggedSurface<'a> {
    recorder: &'a mut dyn HitRecorder,
    index: usize,
}

impl<'a> TaggedSurface<'a> {
    pub fn new(recorder: &'a mut dyn HitRecorder, index: usize) -> Self {
        Self { recorder, index }
    }
}

impl Surface for TaggedSurface<'_> {
    fn plot(&mut self, _glyph: char, x: i32, y: i32) {
        self.recorder.record(self.index, x, y);
    }
}

/// Finds the topmost element touching one cell.
#[derive(Debug, Clone)]
pub struct PointHitTester {
    target: Point,
    hit: Option<usize>,
}

impl PointHitTester {
    pub fn new(target: Point) -> Self {
        Self { target, hit: None }
    }

    /// Index of the last element drawn over the target cell.
    pub fn hit(&self) -> Option<usize> {
        self.hit
    }
}

impl HitRecorder for PointHitTester {
    fn record(&mut self, index: usize, x: i32, y: i32) {
        if self.target == Point::new(x, y) {
            self.hit = Some(index);
        }
    }
}

/// Collects every element touching an inclusive rectangle.
#[derive(Debug, Clone)]
pub struct RegionHitTester {
    min: Point,
    max: Point,
    hits: BTreeSet<usize>,
}

impl RegionHitTester {
    /// The corners may be given in either order.
    pub fn new(a: Point, b: Point) -> Self {
        let (min, max) = Point::bounds(a, b);
        Self {
            min,
            max,
            hits: BTreeSet::new(),
        }
    }

    pub fn hits(&self) -> &BTreeSet<usize> {
        &self.hits
    }

    pub fn into_hits(self) -> BTreeSet<usize> {
        self.hits
    }
}

impl HitRecorder for RegionHitTester {
    fn record(&mut self, index: usize, x: i32, y: i32) {
        if (self.min.x..=self.max.x).contains(&x) && (self.min.y..=self.max.y).contains(&y) {
            self.hits.insert(index);
        }
    }
}
