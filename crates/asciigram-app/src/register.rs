//! Cut/yank register.

use asciigram_core::{Drawable, Element, Point};

/// Holds one element plus the cursor position it was captured at, so a paste
/// keeps the element's offset from the cursor.
#[derive(Debug, Clone, Default)]
pub struct Register {
    contents: Option<(Element, Point)>,
}

impl Register {
    pub fn store(&mut self, element: Element, origin: Point) {
        log::debug!("Register holds a {} captured at {:?}", element.kind(), origin);
        self.contents = Some((element, origin));
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_none()
    }

    /// A copy of the contents moved by the cursor's offset from the capture
    /// point.
    pub fn paste_at(&self, cursor: Point) -> Option<Element> {
        let (element, origin) = self.contents.as_ref()?;
        let mut copy = element.clone();
        let offset = cursor - *origin;
        copy.shift(offset.x, offset.y);
        Some(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigram_core::Text;

    #[test]
    fn test_paste_keeps_offset() {
        let mut register = Register::default();
        assert!(register.paste_at(Point::ZERO).is_none());

        register.store(Text::with_content(Point::new(2, 3), "a").into(), Point::new(3, 3));
        let Some(Element::Text(pasted)) = register.paste_at(Point::new(10, 5)) else {
            panic!("expected text");
        };
        assert_eq!(pasted.position, Point::new(9, 5));
        assert!(!register.is_empty());
    }

    #[test]
    fn test_paste_twice_gives_independent_copies() {
        let mut register = Register::default();
        register.store(Text::with_content(Point::ZERO, "a").into(), Point::ZERO);
        let mut first = register.paste_at(Point::ZERO).unwrap();
        first.shift(4, 4);
        let Some(Element::Text(second)) = register.paste_at(Point::ZERO) else {
            panic!("expected text");
        };
        assert_eq!(second.position, Point::ZERO);
    }
}
