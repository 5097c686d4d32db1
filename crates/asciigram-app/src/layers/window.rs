//! Framed pop-up windows.

use asciigram_core::{BLANK, BoxShape, BoxStyle, Drawable, Point, Surface, SurfaceExt, share};

/// A blanked, framed rectangle with a title in the top border.
#[derive(Debug, Clone)]
pub struct Window {
    pub min: Point,
    pub max: Point,
    pub title: String,
}

impl Window {
    pub fn new(min: Point, max: Point, title: impl Into<String>) -> Self {
        Self {
            min,
            max,
            title: title.into(),
        }
    }

    /// Columns between the side borders.
    pub fn inner_width(&self) -> usize {
        (self.max.x - self.min.x - 1).max(0) as usize
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let frame = share(BoxStyle {
            fill: BLANK,
            ..BoxStyle::default()
        });
        BoxShape::new(self.min, self.max, frame).draw(surface);
        surface.write_text(&self.title, self.min.x + 2, self.min.y);
    }
}
