//! Unbounded in-memory grid.

use std::collections::BTreeMap;

use super::{BLANK, Surface};

/// A grid that grows to fit whatever is drawn on it.
///
/// Used for printing diagrams outside the terminal UI and for checking what
/// an element actually put on the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseGrid {
    /// Cells keyed by `(y, x)` so iteration runs row by row.
    cells: BTreeMap<(i32, i32), char>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph at a cell, if anything was written there.
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.cells.get(&(y, x)).copied()
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate written cells as `(x, y, glyph)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.cells.iter().map(|(&(y, x), &glyph)| (x, y, glyph))
    }

    /// Render the written area as text.
    ///
    /// The leftmost written column becomes column 0. Every row from the top
    /// written row to the bottom one is emitted and terminated by `'\n'`.
    pub fn render(&self) -> String {
        let Some(min_x) = self.cells.keys().map(|&(_, x)| x).min() else {
            return String::new();
        };
        let (Some(&(first_y, _)), Some(&(last_y, _))) =
            (self.cells.keys().next(), self.cells.keys().next_back())
        else {
            return String::new();
        };

        let mut out = String::new();
        for y in first_y..=last_y {
            let mut column = min_x;
            for (&(_, x), &glyph) in self.cells.range((y, i32::MIN)..=(y, i32::MAX)) {
                while column < x {
                    out.push(BLANK);
                    column += 1;
                }
                out.push(glyph);
                column += 1;
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for SparseGrid {
    fn plot(&mut self, glyph: char, x: i32, y: i32) {
        self.cells.insert((y, x), glyph);
    }
}
