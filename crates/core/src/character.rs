use alloc::{string::String, vec::Vec};

use crate::{Bit, BitArray, Error, Result};

/// A single glyph: the patterns it answers to and its pixels.
///
/// Pixels are stored row-major, so the bit at `(row, col)` lives at
/// `row * width + col` in the bitmap. The height is derived from the bitmap
/// length and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    patterns: Vec<String>,
    bitmap: BitArray,
    width: usize,
}

impl Character {
    /// Create a glyph from its patterns, pixel data and width.
    ///
    /// Fails with [Error::InvalidGlyph] when `width` is zero or the bitmap
    /// length is not a multiple of it.
    pub fn new<I, P>(patterns: I, bitmap: BitArray, width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        if width == 0 || bitmap.len() % width != 0 {
            return Err(Error::InvalidGlyph {
                len: bitmap.len(),
                width,
            });
        }

        Ok(Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            bitmap,
            width,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Does this glyph declare `token` as one of its patterns?
    pub fn matches(&self, token: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern == token)
    }

    pub fn bitmap(&self) -> &BitArray {
        &self.bitmap
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.bitmap.len() / self.width
    }

    /// The bits at horizontal offset `x`, read top to bottom.
    pub fn get_column(&self, x: usize) -> Result<Vec<Bit>> {
        if x >= self.width {
            return Err(Error::OutOfRange {
                index: x,
                len: self.width,
            });
        }

        (0..self.height())
            .map(|row| self.bitmap.at_index(row * self.width + x))
            .collect()
    }

    /// The bits of row `y`, read left to right.
    pub fn get_row(&self, y: usize) -> Result<Vec<Bit>> {
        let height = self.height();
        if y >= height {
            return Err(Error::OutOfRange {
                index: y,
                len: height,
            });
        }

        let start = y * self.width;
        (start..start + self.width)
            .map(|index| self.bitmap.at_index(index))
            .collect()
    }
}
