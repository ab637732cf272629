use alloc::vec::Vec;

use crate::{Error, Result};

/// A single pixel value, either 0 (off) or 1 (on).
pub type Bit = u8;

/// A growable vector of bits, packed eight to a byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitArray {
    bytes: Vec<u8>,
    len: usize,
}

impl BitArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Append one bit, growing the storage when the last byte is full.
    pub fn push(&mut self, bit: Bit) -> Result<()> {
        if bit > 1 {
            return Err(Error::InvalidValue(bit));
        }

        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit == 1 {
            // a byte was pushed above whenever offset wrapped to 0
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << offset;
        }
        self.len += 1;

        Ok(())
    }

    /// Read the bit at `index`.
    pub fn at_index(&self, index: usize) -> Result<Bit> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }

        Ok((self.bytes[index / 8] >> (index % 8)) & 1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        (0..self.len).map(|index| (self.bytes[index / 8] >> (index % 8)) & 1)
    }
}

impl TryFrom<&[Bit]> for BitArray {
    type Error = Error;

    fn try_from(bits: &[Bit]) -> Result<Self> {
        let mut array = Self::with_capacity(bits.len());
        for &bit in bits {
            array.push(bit)?;
        }
        Ok(array)
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut array = Self::new();
        for on in iter {
            // a bool always maps to a valid bit
            let _ = array.push(on as Bit);
        }
        array
    }
}
