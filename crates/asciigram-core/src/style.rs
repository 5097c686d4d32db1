//! Glyph styles shared between elements.
//!
//! Every element holds a [`StyleRef`] to the style that was current when it
//! was created. Styles are mutated in place, so editing a style restyles
//! every element that uses it, clones included.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::surface::TRANSPARENT;

/// Shared, mutable handle to a style.
pub type StyleRef<T> = Rc<RefCell<T>>;

/// Wrap a style in a fresh shared handle.
pub fn share<T>(style: T) -> StyleRef<T> {
    Rc::new(RefCell::new(style))
}

/// One editable glyph slot of a style, as shown in the style editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Key that selects the slot.
    pub label: char,
    /// Human readable name.
    pub name: &'static str,
    /// Position in the slot preview grid (1-based).
    pub position: Point,
}

impl Slot {
    const fn new(label: char, name: &'static str, x: i32, y: i32) -> Self {
        Self {
            label,
            name,
            position: Point::new(x, y),
        }
    }
}

/// Styles whose glyphs can be edited slot by slot.
pub trait StyleSlots {
    /// Display name of the style kind.
    const KIND: &'static str;

    /// All slots, in label order.
    const SLOTS: &'static [Slot];

    /// Mutable access to the glyph behind a slot label.
    fn slot_mut(&mut self, label: char) -> Option<&mut char>;

    /// Glyph behind a slot label.
    fn slot(&self, label: char) -> Option<char>;
}

/// Glyphs for drawing boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    /// Top side.
    pub tside: char,
    /// Bottom side.
    pub bside: char,
    /// Left side.
    pub lside: char,
    /// Right side.
    pub rside: char,
    /// Top-left corner.
    pub tl: char,
    /// Top-right corner.
    pub tr: char,
    /// Bottom-left corner.
    pub bl: char,
    /// Bottom-right corner.
    pub br: char,
    /// Interior (transparent = hollow box).
    pub fill: char,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            tside: '-',
            bside: '-',
            lside: '|',
            rside: '|',
            tl: '.',
            tr: '.',
            bl: '\'',
            br: '\'',
            fill: TRANSPARENT,
        }
    }
}

impl StyleSlots for BoxStyle {
    const KIND: &'static str = "Box";

    const SLOTS: &'static [Slot] = &[
        Slot::new('1', "top-left corner", 1, 1),
        Slot::new('2', "top side", 2, 1),
        Slot::new('3', "top-right corner", 3, 1),
        Slot::new('4', "left side", 1, 2),
        Slot::new('5', "fill", 2, 2),
        Slot::new('6', "right side", 3, 2),
        Slot::new('7', "bottom-left corner", 1, 3),
        Slot::new('8', "bottom side", 2, 3),
        Slot::new('9', "bottom-right corner", 3, 3),
    ];

    fn slot_mut(&mut self, label: char) -> Option<&mut char> {
        match label {
            '1' => Some(&mut self.tl),
            '2' => Some(&mut self.tside),
            '3' => Some(&mut self.tr),
            '4' => Some(&mut self.lside),
            '5' => Some(&mut self.fill),
            '6' => Some(&mut self.rside),
            '7' => Some(&mut self.bl),
            '8' => Some(&mut self.bside),
            '9' => Some(&mut self.br),
            _ => None,
        }
    }

    fn slot(&self, label: char) -> Option<char> {
        let glyph = match label {
            '1' => self.tl,
            '2' => self.tside,
            '3' => self.tr,
            '4' => self.lside,
            '5' => self.fill,
            '6' => self.rside,
            '7' => self.bl,
            '8' => self.bside,
            '9' => self.br,
            _ => return None,
        };
        Some(glyph)
    }
}

/// Glyphs for drawing arrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    /// Arrowheads.
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    /// Bends: top-left, top-right, bottom-left, bottom-right.
    pub tl: char,
    pub tr: char,
    pub bl: char,
    pub br: char,
    /// Straight runs.
    pub vertical: char,
    pub horizontal: char,
    /// Start point and intermediate waypoints.
    pub marker: char,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            up: '^',
            down: 'v',
            left: '<',
            right: '>',
            tl: '.',
            tr: '.',
            bl: '\'',
            br: '\'',
            vertical: '|',
            horizontal: '-',
            marker: 'o',
        }
    }
}

impl StyleSlots for ArrowStyle {
    const KIND: &'static str = "Arrow";

    const SLOTS: &'static [Slot] = &[
        Slot::new('1', "top-left bend", 1, 1),
        Slot::new('2', "up head", 2, 1),
        Slot::new('3', "top-right bend", 3, 1),
        Slot::new('4', "left head", 1, 2),
        Slot::new('5', "marker", 2, 2),
        Slot::new('6', "right head", 3, 2),
        Slot::new('7', "bottom-left bend", 1, 3),
        Slot::new('8', "down head", 2, 3),
        Slot::new('9', "bottom-right bend", 3, 3),
        Slot::new('a', "vertical", 5, 1),
        Slot::new('b', "horizontal", 5, 3),
    ];

    fn slot_mut(&mut self, label: char) -> Option<&mut char> {
        match label {
            '1' => Some(&mut self.tl),
            '2' => Some(&mut self.up),
            '3' => Some(&mut self.tr),
            '4' => Some(&mut self.left),
            '5' => Some(&mut self.marker),
            '6' => Some(&mut self.right),
            '7' => Some(&mut self.bl),
            '8' => Some(&mut self.down),
            '9' => Some(&mut self.br),
            'a' => Some(&mut self.vertical),
            'b' => Some(&mut self.horizontal),
            _ => None,
        }
    }

    fn slot(&self, label: char) -> Option<char> {
        let glyph = match label {
            '1' => self.tl,
            '2' => self.up,
            '3' => self.tr,
            '4' => self.left,
            '5' => self.marker,
            '6' => self.right,
            '7' => self.bl,
            '8' => self.down,
            '9' => self.br,
            'a' => self.vertical,
            'b' => self.horizontal,
            _ => return None,
        };
        Some(glyph)
    }
}

/// A rotating set of styles of one kind.
///
/// The first style is the current one and is handed to new elements.
#[derive(Debug, Clone)]
pub struct StyleSet<T> {
    styles: Vec<StyleRef<T>>,
}

impl<T: Default> Default for StyleSet<T> {
    fn default() -> Self {
        Self {
            styles: vec![share(T::default())],
        }
    }
}

impl<T: Clone + Default> StyleSet<T> {
    /// Build a set from plain styles. An empty list yields the default style.
    pub fn from_styles(styles: impl IntoIterator<Item = T>) -> Self {
        let styles: Vec<_> = styles.into_iter().map(share).collect();
        if styles.is_empty() {
            Self::default()
        } else {
            Self { styles }
        }
    }

    /// Handle to the current style.
    pub fn current(&self) -> StyleRef<T> {
        Rc::clone(&self.styles[0])
    }

    /// Copy the current style into a new, independent style and make the
    /// copy current. Elements already using the old style keep it.
    pub fn duplicate_current(&mut self) {
        let copy = self.styles[0].borrow().clone();
        self.styles.insert(0, share(copy));
    }

    /// Make the next style current.
    pub fn next(&mut self) {
        self.styles.rotate_left(1);
    }

    /// Make the previous style current.
    pub fn prev(&mut self) {
        self.styles.rotate_right(1);
    }

    /// Number of styles in the set.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Snapshot of every style, current first.
    pub fn snapshot(&self) -> Vec<T> {
        self.styles.iter().map(|style| style.borrow().clone()).collect()
    }
}
