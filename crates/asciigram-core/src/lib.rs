//! Asciigram Core Library
//!
//! Drawing surfaces, diagram elements and hit testing for the Asciigram
//! ASCII diagram editor. Nothing in here knows about terminals or input.

pub mod canvas;
pub mod hit;
pub mod point;
pub mod shapes;
pub mod style;
pub mod surface;

pub use hit::{HitRecorder, PointHitTester, RegionHitTester, TaggedSurface};
pub use point::Point;
pub use shapes::{Arrow, BoxShape, Drawable, Element, ElementStack, Orientation, Segment, Text};
pub use style::{ArrowStyle, BoxStyle, Slot, StyleRef, StyleSet, StyleSlots, share};
pub use surface::{BLANK, PlainTextSurface, SparseGrid, Surface, SurfaceExt, TRANSPARENT};
