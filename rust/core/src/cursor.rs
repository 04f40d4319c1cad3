// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Byte Cursor
//!
//! Sequential little-endian reader over an immutable buffer. Every accessor
//! advances the offset by the width of the value it returns; reads past the
//! end fail with [`Error::OutOfBounds`] and leave the offset untouched.

use crate::error::{Error, Result};

/// Offset-tracked reader over a borrowed byte buffer
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read position
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total buffer length
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Bytes left between the offset and the end of the buffer
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Borrow the next `len` bytes without advancing.
    pub fn peek(&self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::OutOfBounds {
                offset: self.offset,
                len,
                size: self.data.len(),
            })?;
        Ok(&self.data[self.offset..end])
    }

    /// Advance past `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Read a raw length-delimited blob.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(len)?;
        self.offset += len;
        Ok(bytes)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    /// Booleans are stored as a byte; only the low bit is significant.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? & 1 == 1)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    /// Read a signed 64-bit integer assembled from two 32-bit words.
    ///
    /// The low word comes first. When the high word's sign bit is set the
    /// magnitude is recovered by inverting both words and carrying the +1
    /// from the low word into the high word.
    pub fn read_i64(&mut self) -> Result<i64> {
        let low = self.read_u32()?;
        let high = self.read_u32()?;

        if high & 0x8000_0000 == 0 {
            return Ok(((high as u64) << 32 | low as u64) as i64);
        }

        let mut high = !high;
        let low = !low;
        if low == u32::MAX {
            high = high.wrapping_add(1);
        }
        let low = low.wrapping_add(1);

        // i64::MIN has no positive counterpart; wrapping_neg maps it onto itself
        let magnitude = (high as u64) << 32 | low as u64;
        Ok((magnitude as i64).wrapping_neg())
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    /// Read `len` bytes as single-byte characters.
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        Ok(self.take(len)?.iter().map(|&b| char::from(b)).collect())
    }

    /// Read an offset/length field: 64-bit in wide containers, 32-bit otherwise.
    ///
    /// Negative 64-bit values wrap to huge lengths and surface later as
    /// out-of-bounds reads.
    pub fn read_word(&mut self, is64: bool) -> Result<u64> {
        if is64 {
            Ok(self.read_i64()? as u64)
        } else {
            Ok(self.read_u32()? as u64)
        }
    }
}
