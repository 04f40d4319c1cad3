// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared face classification and edge counting.
//!
//! Both extractors feed vertices and faces into a [`TopologyBuilder`];
//! [`TopologyBuilder::finish`] validates faces, classifies them and counts
//! distinct edges the same way for every input format.

use rustc_hash::FxHashSet;

use crate::data::{FaceKind, TopologyData, TopologyStats};

/// Boundary edges of a face, including the wrap-around from last to first,
/// each ordered so that `(a, b)` and `(b, a)` compare equal.
#[inline]
pub fn face_edges(face: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    face.iter()
        .zip(face.iter().cycle().skip(1))
        .map(|(&a, &b)| if a < b { (a, b) } else { (b, a) })
}

/// Number of distinct unordered vertex pairs along all face boundaries
pub fn count_edges(faces: &[Vec<u32>]) -> usize {
    let mut seen = FxHashSet::default();
    for face in faces {
        seen.extend(face_edges(face));
    }
    seen.len()
}

/// Distinct edges in first-seen order
pub fn unique_edges(faces: &[Vec<u32>]) -> Vec<(u32, u32)> {
    let mut seen = FxHashSet::default();
    faces
        .iter()
        .flat_map(|face| face_edges(face))
        .filter(|edge| seen.insert(*edge))
        .collect()
}

/// Accumulates vertices and faces for one extraction
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    vertices: Vec<[f64; 3]>,
    faces: Vec<Vec<u32>>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn push_vertex(&mut self, position: [f64; 3]) {
        self.vertices.push(position);
    }

    #[inline]
    pub fn push_face(&mut self, face: Vec<u32>) {
        self.faces.push(face);
    }

    /// Drop invalid faces, classify the rest and count edges.
    pub fn finish(self, needs_normalization: bool) -> TopologyData {
        let vertex_count = self.vertices.len();
        let submitted = self.faces.len();

        let mut stats = TopologyStats::default();
        let faces: Vec<Vec<u32>> = self
            .faces
            .into_iter()
            .filter(|face| face.iter().all(|&i| (i as usize) < vertex_count))
            .filter_map(|face| {
                let kind = FaceKind::classify(face.len())?;
                stats.record(kind);
                Some(face)
            })
            .collect();

        if faces.len() < submitted {
            tracing::warn!(
                dropped = submitted - faces.len(),
                "Dropped degenerate or out-of-range faces"
            );
        }

        stats.edges = count_edges(&faces) as u32;
        tracing::debug!(
            vertices = vertex_count,
            quads = stats.quads,
            tris = stats.tris,
            ngons = stats.ngons,
            edges = stats.edges,
            "Topology extracted"
        );

        TopologyData {
            vertices: self.vertices,
            faces,
            stats,
            needs_normalization,
        }
    }
}
