// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed record properties
//!
//! Each property is preceded by a single-letter tag byte:
//!
//! | Tag | Type | | Tag | Type |
//! |-----|------|-|-----|------|
//! | `C` | bool | | `b`/`c` | bool array |
//! | `Y` | i16  | | `i` | i32 array |
//! | `I` | i32  | | `l` | i64 array |
//! | `L` | i64  | | `f` | f32 array |
//! | `F` | f32  | | `d` | f64 array |
//! | `D` | f64  | | `S` | string |
//! | `R` | raw  | | | |
//!
//! Array payloads carry `(length, encoding, compressed_length)`; encoding `1`
//! means the payload is zlib-wrapped DEFLATE.

use std::fmt;
use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};

/// One typed value carried by a record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Raw(Vec<u8>),
    String(String),
    Array(PropertyArray),
}

/// Typed numeric array payload
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyArray {
    Bool(Vec<bool>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl Property {
    /// Integer value of any integral scalar
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Property::I16(v) => Some(*v as i64),
            Property::I32(v) => Some(*v as i64),
            Property::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value of any integral or floating scalar
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Property::F32(v) => Some(*v as f64),
            Property::F64(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Property::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&PropertyArray> {
        match self {
            Property::Array(a) => Some(a),
            _ => None,
        }
    }
}

/// Textual form used when a property keys a map (record ids, table rows).
impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Bool(v) => write!(f, "{v}"),
            Property::I16(v) => write!(f, "{v}"),
            Property::I32(v) => write!(f, "{v}"),
            Property::I64(v) => write!(f, "{v}"),
            Property::F32(v) => write!(f, "{v}"),
            Property::F64(v) => write!(f, "{v}"),
            Property::Raw(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Property::String(s) => f.write_str(s),
            Property::Array(a) => write!(f, "<{} elements>", a.len()),
        }
    }
}

impl PropertyArray {
    pub fn len(&self) -> usize {
        match self {
            PropertyArray::Bool(a) => a.len(),
            PropertyArray::I32(a) => a.len(),
            PropertyArray::I64(a) => a.len(),
            PropertyArray::F32(a) => a.len(),
            PropertyArray::F64(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen every element to f64
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            PropertyArray::Bool(a) => a.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect(),
            PropertyArray::I32(a) => a.iter().map(|&v| v as f64).collect(),
            PropertyArray::I64(a) => a.iter().map(|&v| v as f64).collect(),
            PropertyArray::F32(a) => a.iter().map(|&v| v as f64).collect(),
            PropertyArray::F64(a) => a.clone(),
        }
    }

    /// Widen integral elements to i64; floats truncate toward zero
    pub fn to_i64_vec(&self) -> Vec<i64> {
        match self {
            PropertyArray::Bool(a) => a.iter().map(|&b| b as i64).collect(),
            PropertyArray::I32(a) => a.iter().map(|&v| v as i64).collect(),
            PropertyArray::I64(a) => a.clone(),
            PropertyArray::F32(a) => a.iter().map(|&v| v as i64).collect(),
            PropertyArray::F64(a) => a.iter().map(|&v| v as i64).collect(),
        }
    }
}

/// Read one tagged property at the cursor.
pub fn read_property(cursor: &mut ByteCursor<'_>) -> Result<Property> {
    let tag = cursor.read_u8()?;
    let property = match tag {
        b'C' => Property::Bool(cursor.read_bool()?),
        b'D' => Property::F64(cursor.read_f64()?),
        b'F' => Property::F32(cursor.read_f32()?),
        b'I' => Property::I32(cursor.read_i32()?),
        b'L' => Property::I64(cursor.read_i64()?),
        b'Y' => Property::I16(cursor.read_i16()?),
        b'S' => {
            let len = cursor.read_u32()? as usize;
            Property::String(cursor.read_string(len)?)
        }
        b'R' => {
            let len = cursor.read_u32()? as usize;
            Property::Raw(cursor.read_bytes(len)?.to_vec())
        }
        b'b' | b'c' | b'd' | b'f' | b'i' | b'l' => Property::Array(read_array(cursor, tag)?),
        other => return Err(Error::UnsupportedPropertyType(other)),
    };
    Ok(property)
}

/// Element width in bytes for an array tag
#[inline]
fn element_width(tag: u8) -> usize {
    match tag {
        b'd' | b'l' => 8,
        b'f' | b'i' => 4,
        _ => 1,
    }
}

fn read_array(cursor: &mut ByteCursor<'_>, tag: u8) -> Result<PropertyArray> {
    let length = cursor.read_u32()? as usize;
    let encoding = cursor.read_u32()?;
    let compressed_length = cursor.read_u32()? as usize;

    let width = element_width(tag);
    let byte_len = length.checked_mul(width).ok_or(Error::OutOfBounds {
        offset: cursor.offset(),
        len: usize::MAX,
        size: cursor.size(),
    })?;

    let inflated;
    let payload: &[u8] = if encoding == 1 {
        let compressed = cursor.read_bytes(compressed_length)?;
        inflated = inflate(compressed, byte_len)?;
        &inflated
    } else {
        cursor.read_bytes(byte_len)?
    };

    Ok(decode_elements(payload, tag))
}

/// Inflate a zlib stream, keeping the first `expected` bytes.
///
/// Output beyond `expected` is ignored; a stream that yields fewer bytes is
/// an error.
fn inflate(compressed: &[u8], expected: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    ZlibDecoder::new(compressed)
        .take(expected as u64)
        .read_to_end(&mut out)
        .map_err(|e| Error::DecompressionError(e.to_string()))?;

    if out.len() < expected {
        return Err(Error::DecompressionError(format!(
            "expected {} bytes, inflated {}",
            expected,
            out.len()
        )));
    }
    Ok(out)
}

fn decode_elements(bytes: &[u8], tag: u8) -> PropertyArray {
    match tag {
        b'd' => PropertyArray::F64(
            bytes
                .chunks_exact(8)
                .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect(),
        ),
        b'f' => PropertyArray::F32(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        b'i' => PropertyArray::I32(
            bytes
                .chunks_exact(4)
                .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        b'l' => {
            // Same word assembly as scalar i64 reads
            let mut reader = ByteCursor::new(bytes);
            let mut values = Vec::with_capacity(bytes.len() / 8);
            while let Ok(v) = reader.read_i64() {
                values.push(v);
            }
            PropertyArray::I64(values)
        }
        _ => PropertyArray::Bool(bytes.iter().map(|&b| b & 1 == 1).collect()),
    }
}
