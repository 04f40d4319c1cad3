// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology extraction.

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during topology extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The binary container could not be decoded.
    #[error("container decode failed: {0}")]
    Decode(#[from] meshtopo_core::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
