//! Hit testing must agree with what each element actually draws.

use std::collections::BTreeSet;

use asciigram_core::{
    Arrow, ArrowStyle, BoxShape, BoxStyle, Drawable, ElementStack, Orientation, Point, SparseGrid,
    Text, share,
};

fn document() -> ElementStack {
    let outline = share(BoxStyle::default());
    let filled = share(BoxStyle {
        fill: ' ',
        ..BoxStyle::default()
    });

    let mut arrow = Arrow::new(Point::new(1, 9), share(ArrowStyle::default()));
    arrow.add_point(Point::new(8, 6), Orientation::Horizontal);
    arrow.add_point(Point::new(12, 1), Orientation::Vertical);

    let mut doc = ElementStack::new();
    doc.push(BoxShape::new(Point::new(0, 0), Point::new(6, 5), outline.clone()));
    doc.push(BoxShape::new(Point::new(9, 4), Point::new(3, 2), filled));
    doc.push(Text::with_content(Point::new(4, 3), "hello\nworld"));
    doc.push(arrow);
    doc.push(ElementStack::from_elements(vec![
        BoxShape::new(Point::new(10, 8), Point::new(13, 10), outline).into(),
        Text::with_content(Point::new(11, 9), "g").into(),
    ]));
    doc
}

/// Cells each top-level element touches when drawn on its own.
fn footprints(doc: &ElementStack) -> Vec<SparseGrid> {
    doc.iter()
        .map(|element| {
            let mut grid = SparseGrid::new();
            element.draw(&mut grid);
            grid
        })
        .collect()
}

#[test]
fn test_point_hits_match_topmost_footprint() {
    let doc = document();
    let footprints = footprints(&doc);

    for y in -1..=12 {
        for x in -1..=15 {
            let expected = footprints
                .iter()
                .rposition(|grid| grid.get(x, y).is_some());
            assert_eq!(doc.element_at(Point::new(x, y)), expected, "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_region_hits_match_every_footprint() {
    let doc = document();
    let footprints = footprints(&doc);
    let regions = [
        (Point::new(0, 0), Point::new(14, 11)),
        (Point::new(5, 3), Point::new(4, 4)),
        (Point::new(12, 1), Point::new(12, 1)),
        (Point::new(13, 11), Point::new(10, 9)),
        (Point::new(20, 20), Point::new(30, 30)),
    ];

    for (a, b) in regions {
        let (min, max) = Point::bounds(a, b);
        let expected: BTreeSet<usize> = footprints
            .iter()
            .enumerate()
            .filter(|(_, grid)| {
                grid.cells().any(|(x, y, _)| {
                    (min.x..=max.x).contains(&x) && (min.y..=max.y).contains(&y)
                })
            })
            .map(|(index, _)| index)
            .collect();
        assert_eq!(doc.elements_in(a, b), expected, "region {a:?} {b:?}");
    }
}

#[test]
fn test_whole_document_region_finds_everything() {
    let doc = document();
    let hits = doc.elements_in(Point::new(-5, -5), Point::new(50, 50));
    assert_eq!(hits.len(), doc.len());
}
