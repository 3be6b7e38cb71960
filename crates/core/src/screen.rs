//! Off-screen character buffer for one frame.
//!
//! Cells are stored row-major from the top, with one extra column per row
//! holding [`ROW_TERMINATOR`]. Callers address cells with `y = 0` at the
//! bottom, so ball coordinates can be stamped without flipping.
//!
//! A whole frame is composed here and handed to the terminal as a single
//! block of text.

use crate::types::{BLANK, ROW_TERMINATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize + 1) * (height as usize);
        let mut buf = Self {
            width,
            height,
            cells: vec![BLANK; len],
        };
        buf.clear();
        buf
    }

    /// Drawable columns (the terminator column is not counted).
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw storage, terminators included.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn stride(&self) -> usize {
        self.width as usize + 1
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} screen",
            self.width,
            self.height
        );
        let row = (self.height - 1 - y) as usize;
        row * self.stride() + x as usize
    }

    /// Blank every cell and restore the row terminators.
    pub fn clear(&mut self) {
        let stride = self.stride();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = if i % stride == stride - 1 {
                ROW_TERMINATOR
            } else {
                BLANK
            };
        }
    }

    /// Write `glyph` at `(x, y)`, `y = 0` being the bottom row.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the screen (debug builds check the
    /// terminator column too).
    pub fn set(&mut self, x: u16, y: u16, glyph: char) {
        let i = self.idx(x, y);
        self.cells[i] = glyph;
    }

    /// Read the cell at `(x, y)`, `y = 0` being the bottom row.
    ///
    /// # Panics
    ///
    /// Same contract as [`ScreenBuffer::set`].
    pub fn get(&self, x: u16, y: u16) -> char {
        self.cells[self.idx(x, y)]
    }

    /// Append the whole frame, top row first, to `out`.
    ///
    /// Reusing `out` across frames avoids a fresh allocation per frame.
    pub fn render_into(&self, out: &mut String) {
        out.reserve(self.cells.len());
        out.extend(self.cells.iter());
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len());
        self.render_into(&mut out);
        out
    }
}
