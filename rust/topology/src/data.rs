// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology data handed to the renderer.

use serde::{Deserialize, Serialize};

/// Polygon class by vertex count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Triangle,
    Quad,
    NGon,
}

impl FaceKind {
    /// Classify a face by its vertex count; fewer than three is not a face.
    #[inline]
    pub fn classify(vertex_count: usize) -> Option<Self> {
        match vertex_count {
            0..=2 => None,
            3 => Some(FaceKind::Triangle),
            4 => Some(FaceKind::Quad),
            _ => Some(FaceKind::NGon),
        }
    }
}

/// Aggregate face and edge counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopologyStats {
    pub quads: u32,
    pub tris: u32,
    pub ngons: u32,
    pub edges: u32,
}

impl TopologyStats {
    #[inline]
    pub fn record(&mut self, kind: FaceKind) {
        match kind {
            FaceKind::Triangle => self.tris += 1,
            FaceKind::Quad => self.quads += 1,
            FaceKind::NGon => self.ngons += 1,
        }
    }

    /// Total number of classified faces
    pub fn faces(&self) -> u32 {
        self.quads + self.tris + self.ngons
    }
}

/// Original polygonal structure of a model.
///
/// Every index in `faces` is a valid offset into `vertices`, every face has
/// at least three vertices, and `stats.edges` is the number of distinct
/// unordered vertex pairs along all face boundaries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyData {
    /// Vertex positions, already in the viewer's Y-up space
    pub vertices: Vec<[f64; 3]>,
    /// Faces as 0-based indices into `vertices`
    pub faces: Vec<Vec<u32>>,
    pub stats: TopologyStats,
    /// Positions must be rescaled and recentered onto the rendered mesh's
    /// bounds before overlaying
    pub needs_normalization: bool,
}

impl TopologyData {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
