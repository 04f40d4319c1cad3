// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary Topology Extractor
//!
//! Walks `Objects.Geometry`, remaps each geometry's `Vertices` to the chosen
//! up axis and decodes its `PolygonVertexIndex` stream. In that stream the
//! last index of every polygon is stored as its bitwise complement, so a
//! negative value closes the current face.

use meshtopo_core::{decode, up_axis_of, Document, Node, Record, UpAxis};

use crate::builder::TopologyBuilder;
use crate::data::TopologyData;
use crate::error::Result;

const OBJECTS: &str = "Objects";
const GEOMETRY: &str = "Geometry";
const VERTICES: &str = "Vertices";
const POLYGON_VERTEX_INDEX: &str = "PolygonVertexIndex";

/// Split a polygon-vertex-index stream into faces.
///
/// Indices stay local to the geometry. A trailing run with no terminator is
/// not a face and is discarded.
pub fn decode_polygons(indices: &[i64]) -> Vec<Vec<i64>> {
    let mut faces = Vec::new();
    let mut current = Vec::new();

    for &index in indices {
        if index < 0 {
            current.push(!index);
            faces.push(std::mem::take(&mut current));
        } else {
            current.push(index);
        }
    }

    if !current.is_empty() {
        tracing::warn!(
            indices = current.len(),
            "Discarding unterminated polygon at end of index stream"
        );
    }
    faces
}

/// Extract topology from a decoded document.
///
/// Positions are remapped from `axis`-up into Y-up. The result is flagged
/// for normalization because this coordinate space is not guaranteed to
/// match an independently loaded render mesh.
pub fn extract_binary_topology(document: &Document, axis: UpAxis) -> TopologyData {
    tracing::debug!(
        file_axis = ?up_axis_of(document),
        selected_axis = %axis,
        "Extracting binary topology"
    );

    let mut builder = TopologyBuilder::new();

    let Some(geometries) = document
        .lookup(OBJECTS, &[GEOMETRY])
        .and_then(Node::as_id_indexed)
    else {
        tracing::warn!("No geometry records found");
        return builder.finish(true);
    };

    for (id, geometry) in geometries {
        append_geometry(&mut builder, id, geometry, axis);
    }

    builder.finish(true)
}

fn append_geometry(builder: &mut TopologyBuilder, id: &str, geometry: &Record, axis: UpAxis) {
    let coordinates = geometry
        .child(VERTICES)
        .and_then(Node::as_array)
        .map(|a| a.to_f64_vec())
        .unwrap_or_default();
    let indices = geometry
        .child(POLYGON_VERTEX_INDEX)
        .and_then(Node::as_array)
        .map(|a| a.to_i64_vec())
        .unwrap_or_default();

    tracing::debug!(
        geometry = id,
        coordinates = coordinates.len(),
        indices = indices.len(),
        "Geometry record"
    );
    if coordinates.is_empty() || indices.is_empty() {
        return;
    }
    if coordinates.len() % 3 != 0 {
        tracing::warn!(geometry = id, "Vertex array length is not a multiple of 3");
    }

    let start = builder.vertex_count();
    let local_count = coordinates.len() / 3;
    for xyz in coordinates.chunks_exact(3) {
        builder.push_vertex(axis.remap([xyz[0], xyz[1], xyz[2]]));
    }

    let mut skipped = 0usize;
    for face in decode_polygons(&indices) {
        // Reject indices that would reach into another geometry's block
        if face.iter().any(|&i| i as u64 >= local_count as u64) {
            skipped += 1;
            continue;
        }
        builder.push_face(face.into_iter().map(|i| (i as usize + start) as u32).collect());
    }
    if skipped > 0 {
        tracing::warn!(geometry = id, skipped, "Faces reference missing vertices");
    }
}

/// Decode a binary container and extract its topology.
pub fn parse_binary_topology(data: &[u8], axis: UpAxis) -> Result<TopologyData> {
    let document = decode(data)?;
    Ok(extract_binary_topology(&document, axis))
}
