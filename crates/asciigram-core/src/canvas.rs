//! Document-level operations on the element stack.
//!
//! The document is just an [`ElementStack`]; z-order is stack order.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::hit::{PointHitTester, RegionHitTester};
use crate::point::Point;
use crate::shapes::{Drawable, Element, ElementStack};
use crate::surface::PlainTextSurface;

impl ElementStack {
    /// Index of the topmost element drawn over `point`.
    pub fn element_at(&self, point: Point) -> Option<usize> {
        let mut tester = PointHitTester::new(point);
        self.draw_tagged(&mut tester);
        tester.hit()
    }

    /// Indices of every element drawn anywhere inside the inclusive
    /// rectangle spanned by `a` and `b`.
    pub fn elements_in(&self, a: Point, b: Point) -> BTreeSet<usize> {
        let mut tester = RegionHitTester::new(a, b);
        self.draw_tagged(&mut tester);
        tester.into_hits()
    }

    /// Render the inclusive rectangle spanned by `a` and `b` as plain text.
    pub fn export_region(&self, a: Point, b: Point) -> String {
        let mut surface = PlainTextSurface::new(a, b);
        self.draw(&mut surface);
        surface.joined()
    }

    /// Move an element one layer towards the top.
    /// Returns true if the element was moved, false if already on top.
    pub fn raise(&mut self, index: usize) -> bool {
        if index + 1 < self.len() {
            self.swap(index, index + 1);
            log::debug!("Raised element {index}");
            true
        } else {
            false
        }
    }

    /// Move an element one layer towards the bottom.
    /// Returns true if the element was moved, false if already at the bottom.
    pub fn lower(&mut self, index: usize) -> bool {
        if index > 0 && index < self.len() {
            self.swap(index, index - 1);
            log::debug!("Lowered element {index}");
            true
        } else {
            false
        }
    }

    /// Remove every listed element. Out-of-range indices are ignored.
    ///
    /// Returns the removed elements in ascending index order.
    pub fn remove_many(&mut self, indices: &BTreeSet<usize>) -> Vec<Element> {
        let len = self.len();
        let mut removed: Vec<Element> = indices
            .range(..len)
            .rev()
            .map(|&index| self.remove(index))
            .collect();
        removed.reverse();
        removed
    }

    /// Group the listed elements into a single group.
    ///
    /// Returns the new group's index, or None if fewer than 2 valid indices
    /// were given. The group keeps the members' relative order and takes the
    /// place of the topmost member.
    pub fn group(&mut self, indices: &BTreeSet<usize>) -> Option<usize> {
        let valid: BTreeSet<usize> = indices.range(..self.len()).copied().collect();
        let top = *valid.last()?;
        if valid.len() < 2 {
            return None;
        }

        let members = self.remove_many(&valid);
        let at = top + 1 - members.len();
        log::debug!("Grouped {} elements at {at}", members.len());
        self.insert(at, ElementStack::from_elements(members));
        Some(at)
    }

    /// Dissolve the group at `index`, putting its members back in its place.
    ///
    /// Returns the range of indices now held by the former members, or None
    /// if the element is not a group.
    pub fn ungroup(&mut self, index: usize) -> Option<Range<usize>> {
        if !self.get(index)?.is_group() {
            return None;
        }
        let Element::Group(group) = self.remove(index) else {
            return None;
        };

        let members = group.into_elements();
        let range = index..index + members.len();
        for (offset, member) in members.into_iter().enumerate() {
            self.insert(index + offset, member);
        }
        log::debug!("Ungrouped element {index} into {range:?}");
        Some(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{BoxShape, Text};
    use crate::style::{BoxStyle, share};

    fn outline(a: Point, b: Point) -> BoxShape {
        BoxShape::new(a, b, share(BoxStyle::default()))
    }

    fn filled(a: Point, b: Point) -> BoxShape {
        BoxShape::new(
            a,
            b,
            share(BoxStyle {
                fill: ' ',
                ..BoxStyle::default()
            }),
        )
    }

    fn text(x: i32, y: i32, content: &str) -> Text {
        Text::with_content(Point::new(x, y), content)
    }

    fn contents(stack: &ElementStack) -> Vec<String> {
        stack
            .iter()
            .map(|element| match element {
                Element::Text(t) => t.content.clone(),
                other => other.kind().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_region_over_overlapping_boxes() {
        let mut doc = ElementStack::new();
        doc.push(outline(Point::new(0, 0), Point::new(4, 4)));
        doc.push(filled(Point::new(2, 2), Point::new(6, 6)));
        let hits = doc.elements_in(Point::new(4, 4), Point::new(4, 4));
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_point_hit_prefers_topmost() {
        let mut doc = ElementStack::new();
        doc.push(filled(Point::new(0, 0), Point::new(4, 4)));
        doc.push(filled(Point::new(2, 2), Point::new(6, 6)));
        assert_eq!(doc.element_at(Point::new(3, 3)), Some(1));
        assert_eq!(doc.element_at(Point::new(1, 1)), Some(0));
        assert_eq!(doc.element_at(Point::new(9, 9)), None);
    }

    #[test]
    fn test_hollow_interior_is_not_a_hit() {
        let mut doc = ElementStack::new();
        doc.push(outline(Point::new(0, 0), Point::new(4, 4)));
        assert_eq!(doc.element_at(Point::new(2, 2)), None);
        assert_eq!(doc.element_at(Point::new(0, 2)), Some(0));
    }

    #[test]
    fn test_group_hits_report_group_index() {
        let mut doc = ElementStack::new();
        doc.push(text(0, 0, "a"));
        doc.push(ElementStack::from_elements(vec![text(5, 5, "b").into()]));
        assert_eq!(doc.element_at(Point::new(5, 5)), Some(1));
    }

    #[test]
    fn test_export_region_crops_and_remaps() {
        let mut doc = ElementStack::new();
        doc.push(outline(Point::new(2, 2), Point::new(5, 4)));
        assert_eq!(
            doc.export_region(Point::new(2, 2), Point::new(5, 4)),
            ".--.\n|  |\n'--'\n"
        );
        assert_eq!(
            doc.export_region(Point::new(4, 1), Point::new(6, 3)),
            "\n-.\n |\n"
        );
    }

    #[test]
    fn test_raise_and_lower() {
        let mut doc = ElementStack::new();
        doc.push(text(0, 0, "a"));
        doc.push(text(0, 0, "b"));
        assert!(doc.raise(0));
        assert_eq!(contents(&doc), vec!["b", "a"]);
        assert!(!doc.raise(1));
        assert!(!doc.lower(0));
        assert!(doc.lower(1));
        assert_eq!(contents(&doc), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_many_returns_ascending() {
        let mut doc = ElementStack::new();
        for name in ["a", "b", "c", "d"] {
            doc.push(text(0, 0, name));
        }
        let removed = doc.remove_many(&BTreeSet::from([0, 2, 7]));
        let names: Vec<_> = removed.iter().map(|e| e.kind()).collect();
        assert_eq!(names, vec!["text", "text"]);
        assert_eq!(contents(&doc), vec!["b", "d"]);
    }

    #[test]
    fn test_group_takes_place_of_topmost_member() {
        let mut doc = ElementStack::new();
        for name in ["a", "b", "c", "d"] {
            doc.push(text(0, 0, name));
        }
        assert_eq!(doc.group(&BTreeSet::from([0, 2])), Some(1));
        assert_eq!(contents(&doc), vec!["b", "group", "d"]);

        let group = doc.get(1).and_then(Element::as_group).unwrap();
        assert_eq!(contents(group), vec!["a", "c"]);
    }

    #[test]
    fn test_group_needs_two_members() {
        let mut doc = ElementStack::new();
        doc.push(text(0, 0, "a"));
        assert_eq!(doc.group(&BTreeSet::from([0])), None);
        assert_eq!(doc.group(&BTreeSet::from([0, 5])), None);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_ungroup_restores_members_in_place() {
        let mut doc = ElementStack::new();
        for name in ["a", "b", "c", "d"] {
            doc.push(text(0, 0, name));
        }
        let at = doc.group(&BTreeSet::from([1, 2])).unwrap();
        assert_eq!(doc.ungroup(at), Some(1..3));
        assert_eq!(contents(&doc), vec!["a", "b", "c", "d"]);
        assert_eq!(doc.ungroup(0), None);
        assert_eq!(doc.ungroup(10), None);
    }
}
