//! MSB-first bit cursors.
//!
//! [`BitReader`] walks a borrowed bit slice and fails with
//! [`CodecError::Underrun`] instead of padding with zeros. [`BitWriter`]
//! appends to an owned bit vector.

use bitvec::prelude::*;

use crate::error::CodecError;

/// Owned bit storage used throughout the codec.
pub type Bits = BitVec<u8, Msb0>;

/// Borrowed bit storage used throughout the codec.
pub type BitsRef = BitSlice<u8, Msb0>;

/// Largest field width the cursors move in one step.
pub const MAX_FIELD_BITS: usize = 32;

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Sequential reader over a bit slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a BitsRef,
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit of `bits`.
    pub fn new(bits: &'a BitsRef) -> Self {
        Self { bits, pos: 0 }
    }

    /// Start reading at the first bit of a byte buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes.view_bits::<Msb0>())
    }

    /// Bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read `width` bits as a big-endian unsigned value.
    ///
    /// # Errors
    ///
    /// [`CodecError::Underrun`] if fewer than `width` bits remain. The cursor
    /// does not move in that case.
    pub fn read(&mut self, width: usize) -> Result<u32, CodecError> {
        debug_assert!((1..=MAX_FIELD_BITS).contains(&width));
        self.require(width)?;
        let value = self.bits[self.pos..self.pos + width].load_be::<u32>();
        self.pos += width;
        Ok(value)
    }

    /// Skip `width` bits.
    ///
    /// # Errors
    ///
    /// [`CodecError::Underrun`] if fewer than `width` bits remain.
    pub fn skip(&mut self, width: usize) -> Result<(), CodecError> {
        self.require(width)?;
        self.pos += width;
        Ok(())
    }

    fn require(&self, width: usize) -> Result<(), CodecError> {
        if self.remaining() < width {
            return Err(CodecError::Underrun {
                needed: width,
                available: self.remaining(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Appending bit writer.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bits: Bits,
}

impl BitWriter {
    /// An empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `width` bits of `value`, most significant bit first.
    pub fn write(&mut self, value: u32, width: usize) {
        debug_assert!((1..=MAX_FIELD_BITS).contains(&width));
        let masked = if width >= 32 {
            value
        } else {
            value & ((1u32 << width) - 1)
        };
        let start = self.bits.len();
        self.bits.resize(start + width, false);
        self.bits[start..].store_be::<u32>(masked);
    }

    /// Append `width` zero bits.
    pub fn pad(&mut self, width: usize) {
        let len = self.bits.len();
        self.bits.resize(len + width, false);
    }

    /// Borrow the bits written so far.
    pub fn as_bits(&self) -> &BitsRef {
        &self.bits
    }

    /// Consume the writer, returning its bits.
    pub fn into_bits(self) -> Bits {
        self.bits
    }

    /// Consume the writer, returning bytes with the last byte zero padded.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bits = self.bits;
        bits.set_uninitialized(false);
        bits.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_msb_first() {
        let mut w = BitWriter::new();
        w.write(0b101, 3);
        w.write(0b1, 1);
        w.write(0xF, 4);
        assert_eq!(w.into_bytes(), vec![0b1011_1111]);
    }

    #[test]
    fn write_masks_excess_bits() {
        let mut w = BitWriter::new();
        w.write(0xFF, 4);
        assert_eq!(w.len(), 4);
        assert_eq!(w.into_bytes(), vec![0xF0]);
    }

    #[test]
    fn reads_across_byte_boundaries() {
        let bytes = [0b0000_0111, 0b1100_0000];
        let mut r = BitReader::from_bytes(&bytes);
        assert_eq!(r.read(5).unwrap(), 0);
        assert_eq!(r.read(5).unwrap(), 0b11111);
        assert_eq!(r.remaining(), 6);
    }

    #[test]
    fn write_then_read_wide_value() {
        let mut w = BitWriter::new();
        w.write(1, 1);
        w.write(0x7FFF_FFFF, 31);
        w.write(0xABCD, 16);
        let bits = w.into_bits();
        let mut r = BitReader::new(&bits);
        assert_eq!(r.read(1).unwrap(), 1);
        assert_eq!(r.read(31).unwrap(), 0x7FFF_FFFF);
        assert_eq!(r.read(16).unwrap(), 0xABCD);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn underrun_is_an_error_and_keeps_position() {
        let bytes = [0xFF];
        let mut r = BitReader::from_bytes(&bytes);
        r.read(6).unwrap();
        let err = r.read(3).unwrap_err();
        assert_eq!(
            err,
            CodecError::Underrun {
                needed: 3,
                available: 2
            }
        );
        assert_eq!(r.position(), 6);
    }

    #[test]
    fn skip_checks_bounds() {
        let bytes = [0x00];
        let mut r = BitReader::from_bytes(&bytes);
        assert!(r.skip(8).is_ok());
        assert!(r.skip(1).is_err());
    }
}
