// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MeshTopo Core
//!
//! Decoder for the Kaydara binary model container.
//!
//! ## Overview
//!
//! - **Byte Cursor**: bounds-checked little-endian reads over a borrowed buffer
//! - **Property Grammar**: tagged scalars, strings, blobs and (optionally
//!   zlib-compressed) typed arrays
//! - **Node-Tree Parser**: recursive descent over nested records
//! - **Normalizer**: ordered rules that turn raw records into a queryable tree
//! - **Up-Axis Detector**: reads the file's declared vertical axis
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meshtopo_core::{decode, Node};
//!
//! let data = std::fs::read("model.fbx")?;
//! let document = decode(&data)?;
//!
//! if let Some(geometry) = document.lookup("Objects", &["Geometry"]).and_then(Node::as_id_indexed) {
//!     for (id, record) in geometry {
//!         println!("Geometry {}: {} properties", id, record.properties.len());
//!     }
//! }
//! ```
//!
//! Decoding is synchronous and allocation-local: every call owns its cursor
//! and returns a fresh [`Document`], so buffers can be decoded concurrently.
//!
//! ## Feature Flags
//!
//! - `serde`: serialization for properties and [`UpAxis`]
//! - `test-support`: the [`fixture`] writer for hand-built containers

pub mod axis;
pub mod cursor;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod fixture;
pub mod normalize;
pub mod parser;
pub mod property;
pub mod tree;
pub mod up_axis;

pub use axis::{ParseAxisError, UpAxis};
pub use cursor::ByteCursor;
pub use error::{Error, Result};
pub use normalize::{select_rule, Rule};
pub use parser::{decode, decode_with, is_binary_container, BinaryParser, DecodeConfig};
pub use property::{Property, PropertyArray};
pub use tree::{Children, Document, IdIndex, Node, Record};
pub use up_axis::{detect_up_axis, up_axis_of};
