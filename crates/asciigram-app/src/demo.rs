//! Built-in sample diagram for `--demo`.

use asciigram_core::{
    Arrow, ArrowStyle, BoxShape, BoxStyle, Drawable, ElementStack, Orientation, Point, SparseGrid,
    StyleRef, StyleSet, Text,
};

use crate::config::AppConfig;

fn labelled_box(
    min: Point,
    max: Point,
    label: &str,
    style: &StyleRef<BoxStyle>,
) -> ElementStack {
    let mut group = ElementStack::new();
    group.push(BoxShape::new(min, max, style.clone()));
    group.push(Text::with_content(Point::new(min.x + 2, min.y + 2), label));
    group
}

/// A small architecture sketch exercising every element kind.
pub fn demo_document(box_style: StyleRef<BoxStyle>, arrow_style: StyleRef<ArrowStyle>) -> ElementStack {
    let mut document = ElementStack::new();
    document.push(labelled_box(Point::new(0, 0), Point::new(12, 4), "editor", &box_style));
    document.push(labelled_box(Point::new(24, 0), Point::new(36, 4), "terminal", &box_style));

    let mut draw = Arrow::new(Point::new(13, 2), arrow_style.clone());
    draw.add_point(Point::new(23, 2), Orientation::default());
    document.push(draw);

    let mut copy = Arrow::new(Point::new(6, 5), arrow_style);
    copy.add_point(Point::new(6, 8), Orientation::default());
    copy.add_point(Point::new(23, 8), Orientation::default());
    document.push(copy);

    document.push(Text::with_content(Point::new(25, 8), "clipboard\n(region as text)"));
    document
}

/// The demo diagram as plain text, drawn with the configured styles.
pub fn render_demo(config: &AppConfig) -> String {
    let boxes = StyleSet::from_styles(config.box_styles.iter().cloned());
    let arrows = StyleSet::from_styles(config.arrow_styles.iter().cloned());
    let mut grid = SparseGrid::new();
    demo_document(boxes.current(), arrows.current()).draw(&mut grid);
    grid.render()
}
