// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimal container writer for building test buffers by hand.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::parser::{MAGIC, SIGNATURE_LEN, WIDE_OFFSET_VERSION};
use crate::property::{Property, PropertyArray};

/// A record to encode, with its properties and nested records
#[derive(Debug, Clone, Default)]
pub struct RecordSpec {
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<RecordSpec>,
    /// Store array properties zlib-compressed
    pub compress: bool,
}

impl RecordSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn prop(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn child(mut self, child: RecordSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn compressed(mut self) -> Self {
        self.compress = true;
        self
    }
}

/// Encode a complete container: header, records and end sentinel.
pub fn encode_document(version: u32, records: &[RecordSpec]) -> Vec<u8> {
    let is64 = version >= WIDE_OFFSET_VERSION;
    let mut out = Vec::new();

    out.extend_from_slice(MAGIC);
    out.resize(SIGNATURE_LEN, b' ');
    out.extend_from_slice(&[0x00, 0x1A, 0x00]);
    out.extend_from_slice(&version.to_le_bytes());

    for record in records {
        write_record(&mut out, record, is64);
    }
    out.resize(out.len() + sentinel_len(is64), 0);
    out
}

fn sentinel_len(is64: bool) -> usize {
    if is64 {
        25
    } else {
        13
    }
}

fn write_word(out: &mut Vec<u8>, value: u64, is64: bool) {
    if is64 {
        out.extend_from_slice(&value.to_le_bytes());
    } else {
        out.extend_from_slice(&(value as u32).to_le_bytes());
    }
}

fn patch_word(out: &mut [u8], at: usize, value: u64, is64: bool) {
    if is64 {
        out[at..at + 8].copy_from_slice(&value.to_le_bytes());
    } else {
        out[at..at + 4].copy_from_slice(&(value as u32).to_le_bytes());
    }
}

fn write_record(out: &mut Vec<u8>, spec: &RecordSpec, is64: bool) {
    let width = if is64 { 8 } else { 4 };
    let start = out.len();

    write_word(out, 0, is64);
    write_word(out, spec.properties.len() as u64, is64);
    write_word(out, 0, is64);
    out.push(spec.name.len() as u8);
    out.extend(spec.name.chars().map(|c| c as u8));

    let properties_start = out.len();
    for property in &spec.properties {
        write_property(out, property, spec.compress);
    }
    let property_list_len = (out.len() - properties_start) as u64;

    for child in &spec.children {
        write_record(out, child, is64);
    }
    if !spec.children.is_empty() {
        out.resize(out.len() + sentinel_len(is64), 0);
    }

    let end = out.len() as u64;
    patch_word(out, start, end, is64);
    patch_word(out, start + 2 * width, property_list_len, is64);
}

fn write_property(out: &mut Vec<u8>, property: &Property, compress: bool) {
    match property {
        Property::Bool(v) => {
            out.push(b'C');
            out.push(*v as u8);
        }
        Property::I16(v) => {
            out.push(b'Y');
            out.extend_from_slice(&v.to_le_bytes());
        }
        Property::I32(v) => {
            out.push(b'I');
            out.extend_from_slice(&v.to_le_bytes());
        }
        Property::I64(v) => {
            out.push(b'L');
            out.extend_from_slice(&v.to_le_bytes());
        }
        Property::F32(v) => {
            out.push(b'F');
            out.extend_from_slice(&v.to_le_bytes());
        }
        Property::F64(v) => {
            out.push(b'D');
            out.extend_from_slice(&v.to_le_bytes());
        }
        Property::Raw(bytes) => {
            out.push(b'R');
            out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
            out.extend_from_slice(bytes);
        }
        Property::String(s) => {
            out.push(b'S');
            out.extend_from_slice(&(s.chars().count() as u32).to_le_bytes());
            out.extend(s.chars().map(|c| c as u8));
        }
        Property::Array(array) => write_array(out, array, compress),
    }
}

fn write_array(out: &mut Vec<u8>, array: &PropertyArray, compress: bool) {
    let (tag, payload): (u8, Vec<u8>) = match array {
        PropertyArray::Bool(a) => (b'b', a.iter().map(|&b| b as u8).collect()),
        PropertyArray::I32(a) => (b'i', a.iter().flat_map(|v| v.to_le_bytes()).collect()),
        PropertyArray::I64(a) => (b'l', a.iter().flat_map(|v| v.to_le_bytes()).collect()),
        PropertyArray::F32(a) => (b'f', a.iter().flat_map(|v| v.to_le_bytes()).collect()),
        PropertyArray::F64(a) => (b'd', a.iter().flat_map(|v| v.to_le_bytes()).collect()),
    };

    let (encoding, payload) = if compress {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&payload)
            .expect("writing to an in-memory buffer");
        let packed = encoder.finish().expect("finishing an in-memory buffer");
        (1u32, packed)
    } else {
        (0u32, payload)
    };

    out.push(tag);
    out.extend_from_slice(&(array.len() as u32).to_le_bytes());
    out.extend_from_slice(&encoding.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&payload);
}
