// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # MeshTopo Topology
//!
//! Recovers the authored polygon structure (quads, triangles, n-gons and
//! edge counts) that general-purpose loaders discard when they triangulate.
//!
//! Two extractors share one classification and edge-counting pass:
//!
//! - [`parse_binary_topology`] for the Kaydara binary container, with
//!   positions remapped from a chosen up axis
//! - [`extract_text_topology`] for the plain-text format
//!
//! Both return [`TopologyData`], whose JSON form is the overlay input of the
//! browser viewer. [`edge_segments`] turns it into line positions fitted
//! onto the rendered mesh's bounds.

pub mod binary;
pub mod builder;
pub mod data;
pub mod error;
pub mod overlay;
pub mod serialization;
pub mod text;

pub use binary::{decode_polygons, extract_binary_topology, parse_binary_topology};
pub use builder::{count_edges, face_edges, unique_edges, TopologyBuilder};
pub use data::{FaceKind, TopologyData, TopologyStats};
pub use error::{Error, Result};
pub use meshtopo_core::UpAxis;
pub use overlay::{edge_segments, Bounds, OverlayFit};
pub use text::extract_text_topology;
