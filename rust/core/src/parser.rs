//! Node-Tree Parser
//!
//! Recursive-descent parser for the binary container:
//!
//! ```text
//! header   := signature[20] reserved[3] version:u32
//! content  := record* sentinel
//! record   := end_offset num_properties property_list_len name_len:u8 name
//!             property{num_properties} record*      (until end_offset)
//! ```
//!
//! `end_offset`, `num_properties` and `property_list_len` are 64-bit from
//! version 7500 on, 32-bit before. A record whose `end_offset` is zero is a
//! null terminator. A run of 13 (or 25) zero bytes ends the content.

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::normalize;
use crate::property::read_property;
use crate::tree::{Document, Record};

/// Signature at the start of every binary container
pub const MAGIC: &[u8] = b"Kaydara FBX Binary";
/// Bytes of header inspected for the signature
pub const SIGNATURE_LEN: usize = 20;
/// Reserved bytes between the signature and the version
const RESERVED_LEN: usize = 3;
/// First version using 64-bit record offsets
pub const WIDE_OFFSET_VERSION: u32 = 7500;

/// Decoder configuration
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Maximum record nesting depth
    pub max_depth: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Whether the buffer starts with the binary container signature
pub fn is_binary_container(data: &[u8]) -> bool {
    data.get(..SIGNATURE_LEN)
        .map(|header| header.windows(MAGIC.len()).any(|w| w == MAGIC))
        .unwrap_or(false)
}

/// Binary container parser
pub struct BinaryParser<'a> {
    cursor: ByteCursor<'a>,
    config: DecodeConfig,
    is64: bool,
}

impl<'a> BinaryParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecodeConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecodeConfig) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            config,
            is64: false,
        }
    }

    /// Parse the whole buffer into a normalized document.
    pub fn parse(mut self) -> Result<Document> {
        let version = self.read_header()?;
        self.is64 = version >= WIDE_OFFSET_VERSION;
        tracing::debug!(version, is64 = self.is64, "Parsing binary container");

        let mut document = Document {
            version,
            is64: self.is64,
            ..Document::default()
        };

        while !self.end_of_content()? {
            if let Some(record) = self.parse_record(0)? {
                document.records.insert(record.name.clone(), record);
            }
        }

        tracing::debug!(records = document.records.len(), "Parsed top-level records");
        Ok(document)
    }

    fn read_header(&mut self) -> Result<u32> {
        if !is_binary_container(self.cursor.peek(self.cursor.size().min(SIGNATURE_LEN))?) {
            return Err(Error::FormatError(
                "missing Kaydara binary signature".to_string(),
            ));
        }
        self.cursor.skip(SIGNATURE_LEN + RESERVED_LEN)?;
        self.cursor.read_u32()
    }

    /// Peek the sentinel region; all zeros (or too little data) ends the content.
    fn end_of_content(&self) -> Result<bool> {
        let size = if self.is64 { 25 } else { 13 };
        if self.cursor.remaining() < size {
            return Ok(true);
        }
        Ok(self.cursor.peek(size)?.iter().all(|&b| b == 0))
    }

    fn parse_record(&mut self, depth: usize) -> Result<Option<Record>> {
        if depth > self.config.max_depth {
            return Err(Error::NestingTooDeep {
                depth,
                limit: self.config.max_depth,
            });
        }

        let end_offset = self.cursor.read_word(self.is64)?;
        let num_properties = self.cursor.read_word(self.is64)?;
        let _property_list_len = self.cursor.read_word(self.is64)?;
        let name_len = self.cursor.read_u8()? as usize;
        let name = self.cursor.read_string(name_len)?;

        if end_offset == 0 {
            return Ok(None);
        }

        // The count is untrusted; each property consumes at least two bytes
        let capacity = (num_properties as usize).min(self.cursor.remaining() / 2);
        let mut record = Record::new(name, Vec::with_capacity(capacity));
        for _ in 0..num_properties {
            record.properties.push(read_property(&mut self.cursor)?);
        }

        // Every nested record consumes at least its header, so this terminates
        while (self.cursor.offset() as u64) < end_offset {
            if let Some(child) = self.parse_record(depth + 1)? {
                normalize::attach(&mut record, child);
            }
        }

        Ok(Some(record))
    }
}

/// Decode a binary container with the default configuration.
pub fn decode(data: &[u8]) -> Result<Document> {
    BinaryParser::new(data).parse()
}

/// Decode a binary container with an explicit configuration.
pub fn decode_with(data: &[u8], config: DecodeConfig) -> Result<Document> {
    BinaryParser::with_config(data, config).parse()
}
