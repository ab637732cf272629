use alloc::vec::Vec;

use crate::Bit;

/// A rows × columns grid of bits, stored row-major.
///
/// A [crate::Panel] owns one frame and rewrites it in place on every tick, so
/// a [Renderer] that wants to keep a frame past the call must clone it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    columns: usize,
    bits: Vec<Bit>,
}

impl Frame {
    /// An all-off frame.
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut bits = Vec::new();
        bits.resize(rows * columns, 0);
        Self {
            rows,
            columns,
            bits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Bit> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.bits[row * self.columns + column])
    }

    /// The bits of one row. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[Bit] {
        let start = row * self.columns;
        &self.bits[start..start + self.columns]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Bit]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// Copy `bits` down column `column`. Extra bits are ignored and missing
    /// ones leave the frame as it was.
    pub fn set_column(&mut self, column: usize, bits: &[Bit]) {
        if column >= self.columns {
            return;
        }
        for (row, &bit) in bits.iter().take(self.rows).enumerate() {
            self.bits[row * self.columns + column] = bit;
        }
    }

    /// Copy `bits` across row `row`, with the same truncation as [Frame::set_column].
    pub fn set_row(&mut self, row: usize, bits: &[Bit]) {
        if row >= self.rows {
            return;
        }
        let start = row * self.columns;
        let len = bits.len().min(self.columns);
        self.bits[start..start + len].copy_from_slice(&bits[..len]);
    }

    /// Turn every cell off.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    pub fn to_rows(&self) -> Vec<Vec<Bit>> {
        self.iter_rows().map(<[Bit]>::to_vec).collect()
    }
}

/// Consumes frames produced by a [crate::Panel].
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

impl<F> Renderer for F
where
    F: FnMut(&Frame),
{
    fn render(&mut self, frame: &Frame) {
        self(frame)
    }
}
