// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for container decoding.

use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a binary container.
///
/// Every variant is recoverable: callers treat a failed decode as
/// "no topology available" and keep going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The signature header is missing or does not match.
    #[error("Not a binary container: {0}")]
    FormatError(String),

    /// A read ran past the end of the buffer.
    #[error("Read of {len} bytes at offset {offset} exceeds buffer of {size} bytes")]
    OutOfBounds { offset: usize, len: usize, size: usize },

    /// A property tag outside the closed set of known types.
    #[error("Unsupported property type: {:?}", char::from(*.0))]
    UnsupportedPropertyType(u8),

    /// A compressed array payload was corrupt or inflated to the wrong size.
    #[error("Array decompression failed: {0}")]
    DecompressionError(String),

    /// Record nesting exceeded the configured limit.
    #[error("Record nesting depth {depth} exceeds limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}
