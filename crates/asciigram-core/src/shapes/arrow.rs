//! Orthogonal arrows.

use super::Drawable;
use crate::point::Point;
use crate::style::{ArrowStyle, StyleRef};
use crate::surface::{Surface, SurfaceExt};

/// Which leg of a segment is drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Go vertically, then horizontally.
    #[default]
    Vertical,
    /// Go horizontally, then vertically.
    Horizontal,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

/// One L-shaped piece of an arrow, ending at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub to: Point,
    pub orientation: Orientation,
}

impl Segment {
    /// The cell where the segment turns when coming from `from`.
    pub fn bend(&self, from: Point) -> Point {
        match self.orientation {
            Orientation::Vertical => Point::new(from.x, self.to.y),
            Orientation::Horizontal => Point::new(self.to.x, from.y),
        }
    }
}

/// An arrow from `start` through a list of waypoints.
#[derive(Debug, Clone)]
pub struct Arrow {
    pub start: Point,
    pub segments: Vec<Segment>,
    pub style: StyleRef<ArrowStyle>,
}

impl Arrow {
    /// Create an arrow without any segments (draws nothing yet).
    pub fn new(start: Point, style: StyleRef<ArrowStyle>) -> Self {
        Self {
            start,
            segments: Vec::new(),
            style,
        }
    }

    /// Append a waypoint.
    pub fn add_point(&mut self, to: Point, orientation: Orientation) {
        self.segments.push(Segment { to, orientation });
    }

    /// Toggle which leg the last segment draws first.
    ///
    /// # Panics
    /// If the arrow has no segments.
    pub fn flip_last(&mut self) {
        let Some(last) = self.segments.last_mut() else {
            panic!("flip_last called on an arrow without segments");
        };
        last.orientation = last.orientation.flipped();
    }

    /// Move the final waypoint.
    ///
    /// # Panics
    /// If the arrow has no segments.
    pub fn set_end(&mut self, to: Point) {
        let Some(last) = self.segments.last_mut() else {
            panic!("set_end called on an arrow without segments");
        };
        last.to = to;
    }

    /// The final waypoint, if any.
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|segment| segment.to)
    }

    /// The waypoint before the final one (the start counts as a waypoint).
    pub fn second_last(&self) -> Option<Point> {
        match self.segments.len() {
            0 => None,
            1 => Some(self.start),
            n => Some(self.segments[n - 2].to),
        }
    }

    /// Start, every bend and every waypoint, in path order.
    pub fn markers(&self) -> Vec<Point> {
        let mut markers = vec![self.start];
        let mut from = self.start;
        for segment in &self.segments {
            markers.push(segment.bend(from));
            markers.push(segment.to);
            from = segment.to;
        }
        markers
    }
}

/// Unit direction from `a` towards `b` along one axis, `(0, 0)` if equal.
fn direction(a: Point, b: Point) -> Point {
    Point::new((b.x - a.x).signum(), (b.y - a.y).signum())
}

fn draw_leg(surface: &mut dyn Surface, style: &ArrowStyle, a: Point, b: Point) {
    if a.x == b.x {
        surface.line_vertical(style.vertical, a.x, a.y, b.y);
    } else {
        surface.line_horizontal(style.horizontal, a.x, a.y, b.x);
    }
}

/// Bend glyph for a corner whose legs leave towards `d1` and `d2`.
fn bend_glyph(style: &ArrowStyle, d1: Point, d2: Point) -> char {
    let horizontal = d1.x + d2.x;
    let vertical = d1.y + d2.y;
    match (horizontal > 0, vertical > 0) {
        (true, true) => style.tl,
        (false, true) => style.tr,
        (true, false) => style.bl,
        (false, false) => style.br,
    }
}

fn head_glyph(style: &ArrowStyle, travel: Point) -> char {
    match (travel.x, travel.y) {
        (1, _) => style.right,
        (-1, _) => style.left,
        (_, 1) => style.down,
        (_, -1) => style.up,
        _ => style.marker,
    }
}

impl Drawable for Arrow {
    fn draw(&self, surface: &mut dyn Surface) {
        let Some((last, rest)) = self.segments.split_last() else {
            return;
        };
        let style = self.style.borrow();

        let mut bends = Vec::new();
        let mut from = self.start;
        for segment in &self.segments {
            let bend = segment.bend(from);
            let to = segment.to;
            if from != bend {
                draw_leg(surface, &style, from, bend);
            }
            if bend != to {
                draw_leg(surface, &style, bend, to);
            }
            if from != bend && bend != to {
                let glyph = bend_glyph(&style, direction(bend, from), direction(bend, to));
                bends.push((glyph, bend));
            }
            from = to;
        }

        for (glyph, at) in bends {
            surface.set(glyph, at.x, at.y);
        }

        surface.set(style.marker, self.start.x, self.start.y);
        for segment in rest {
            surface.set(style.marker, segment.to.x, segment.to.y);
        }

        let from = self.second_last().unwrap_or(self.start);
        let bend = last.bend(from);
        let travel = if bend != last.to {
            direction(bend, last.to)
        } else {
            direction(from, last.to)
        };
        surface.set(head_glyph(&style, travel), last.to.x, last.to.y);
    }

    fn shift(&mut self, dx: i32, dy: i32) {
        self.start.shift(dx, dy);
        for segment in &mut self.segments {
            segment.to.shift(dx, dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::share;
    use crate::surface::{SparseGrid, TRANSPARENT};

    fn arrow(start: Point) -> Arrow {
        Arrow::new(start, share(ArrowStyle::default()))
    }

    fn render(arrow: &Arrow) -> String {
        let mut grid = SparseGrid::new();
        arrow.draw(&mut grid);
        grid.render()
    }

    #[test]
    fn test_empty_arrow_draws_nothing() {
        let mut grid = SparseGrid::new();
        arrow(Point::new(3, 3)).draw(&mut grid);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_straight_horizontal_arrow() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(4, 0), Orientation::Vertical);
        assert_eq!(render(&a), "o--->\n");
    }

    #[test]
    fn test_straight_arrow_pointing_up() {
        let mut a = arrow(Point::new(0, 3));
        a.add_point(Point::new(0, 0), Orientation::Horizontal);
        assert_eq!(render(&a), "^\n|\n|\no\n");
    }

    #[test]
    fn test_vertical_first_bend() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(3, 2), Orientation::Vertical);
        assert_eq!(render(&a), "o\n|\n'-->\n");
    }

    #[test]
    fn test_horizontal_first_bend() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(3, 2), Orientation::Horizontal);
        assert_eq!(render(&a), "o--.\n   |\n   v\n");
    }

    #[test]
    fn test_flip_last_only_touches_last_segment() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(2, 2), Orientation::Vertical);
        a.add_point(Point::new(4, 4), Orientation::Vertical);
        a.flip_last();
        assert_eq!(a.segments[0].orientation, Orientation::Vertical);
        assert_eq!(a.segments[1].orientation, Orientation::Horizontal);
    }

    #[test]
    #[should_panic(expected = "without segments")]
    fn test_flip_last_without_segments_panics() {
        arrow(Point::new(0, 0)).flip_last();
    }

    #[test]
    fn test_intermediate_waypoints_get_markers() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(2, 0), Orientation::Vertical);
        a.add_point(Point::new(5, 0), Orientation::Vertical);
        assert_eq!(render(&a), "o-o-->\n");
    }

    #[test]
    fn test_zero_length_segment_gets_marker() {
        let mut a = arrow(Point::new(1, 1));
        a.add_point(Point::new(1, 1), Orientation::Vertical);
        let mut grid = SparseGrid::new();
        a.draw(&mut grid);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(1, 1), Some('o'));
    }

    #[test]
    fn test_transparent_marker_keeps_line() {
        let style = share(ArrowStyle {
            marker: TRANSPARENT,
            ..ArrowStyle::default()
        });
        let mut a = Arrow::new(Point::new(0, 0), style);
        a.add_point(Point::new(3, 0), Orientation::Vertical);
        assert_eq!(render(&a), "--->\n");
    }

    #[test]
    fn test_markers_list_bends() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(3, 2), Orientation::Vertical);
        assert_eq!(
            a.markers(),
            vec![Point::new(0, 0), Point::new(0, 2), Point::new(3, 2)]
        );
    }

    #[test]
    fn test_second_last_waypoint() {
        let mut a = arrow(Point::new(0, 0));
        assert_eq!(a.second_last(), None);
        a.add_point(Point::new(1, 1), Orientation::Vertical);
        assert_eq!(a.second_last(), Some(Point::new(0, 0)));
        a.add_point(Point::new(2, 2), Orientation::Vertical);
        assert_eq!(a.second_last(), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_shift_moves_every_point() {
        let mut a = arrow(Point::new(0, 0));
        a.add_point(Point::new(3, 2), Orientation::Vertical);
        a.shift(1, 1);
        assert_eq!(a.start, Point::new(1, 1));
        assert_eq!(a.end(), Some(Point::new(4, 3)));
    }
}
