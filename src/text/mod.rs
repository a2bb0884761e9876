//! Owned UTF-16 text buffer
//!
//! This module provides [`Utf16Buffer`], the text representation shared by
//! the boundary iterator and the bidi context. The buffer is a growable
//! sequence of 16-bit code units that is kept structurally valid: no
//! operation of this API introduces an unpaired surrogate. Length is
//! always counted in code units, not code points.

use crate::constants::limits;
use crate::error::{BoundError, Result};
use std::fmt::{self, Display};
use unicode_segmentation::UnicodeSegmentation;

/// Owned, growable UTF-16 text with UTF-8 interoperability at the edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utf16Buffer {
    units: Vec<u16>,
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

impl Utf16Buffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Utf16Buffer { units: Vec::new() }
    }

    /// Decode a UTF-8 byte sequence into a new buffer
    ///
    /// Fails with `InvalidEncoding` on malformed input; valid UTF-8 is
    /// converted losslessly.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let s = std::str::from_utf8(bytes).map_err(|_| BoundError::InvalidEncoding)?;
        Ok(Utf16Buffer {
            units: s.encode_utf16().collect(),
        })
    }

    /// Length in code units (a non-BMP code point counts as two)
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the buffer holds no code units
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Read-only view of the raw code units
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Get the code unit at index `i`
    pub fn code_unit_at(&self, i: usize) -> Result<u16> {
        self.units.get(i).copied().ok_or(BoundError::OutOfRange {
            index: i,
            len: self.units.len(),
        })
    }

    /// Append one code point, encoded as one unit or a surrogate pair
    ///
    /// Rejects values beyond U+10FFFF and surrogate code points with
    /// `InvalidCodePoint`; a lone surrogate would break the buffer's
    /// structural invariant.
    pub fn append_code_point(&mut self, cp: u32) -> Result<()> {
        if cp > limits::MAX_CODE_POINT
            || (limits::SURROGATE_START..=limits::SURROGATE_END).contains(&cp)
        {
            return Err(BoundError::InvalidCodePoint(cp));
        }
        let c = char::from_u32(cp).ok_or(BoundError::InvalidCodePoint(cp))?;
        let mut enc = [0u16; 2];
        self.units.extend_from_slice(c.encode_utf16(&mut enc));
        Ok(())
    }

    /// Concatenate another buffer's code units onto this one
    pub fn append_buffer(&mut self, other: &Utf16Buffer) {
        self.units.extend_from_slice(&other.units);
    }

    /// Copy the code units in `[start, end)` into a new buffer
    ///
    /// Fails with `OutOfRange` if an index exceeds the length, if
    /// `start > end`, or if either bound falls between the two halves of
    /// a surrogate pair. Refusing the split keeps every buffer this API
    /// produces structurally valid.
    pub fn substring(&self, start: usize, end: usize) -> Result<Utf16Buffer> {
        let len = self.units.len();
        if start > end || end > len {
            let index = if end > len { end } else { start };
            return Err(BoundError::OutOfRange { index, len });
        }
        for bound in [start, end] {
            if bound > 0
                && bound < len
                && is_low_surrogate(self.units[bound])
                && is_high_surrogate(self.units[bound - 1])
            {
                return Err(BoundError::OutOfRange { index: bound, len });
            }
        }
        Ok(Utf16Buffer {
            units: self.units[start..end].to_vec(),
        })
    }

    /// Reverse the text in place, by extended grapheme cluster
    ///
    /// Reversing raw code units would break surrogate pairs and reorder
    /// combining marks; reversing whole clusters keeps each user-perceived
    /// character intact.
    pub fn reverse_in_place(&mut self) -> Result<()> {
        let s = self.to_utf8()?;
        let reversed: String = s.graphemes(true).rev().collect();
        self.units = reversed.encode_utf16().collect();
        Ok(())
    }

    /// Iterate the buffer's code points in logical order
    ///
    /// Ill-formed units (unreachable through this API) decode to U+FFFD.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        char::decode_utf16(self.units.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Re-encode the buffer as UTF-8
    pub fn to_utf8(&self) -> Result<String> {
        String::from_utf16(&self.units).map_err(|_| BoundError::InvalidEncoding)
    }
}

impl Display for Utf16Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf16_lossy(&self.units))
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
