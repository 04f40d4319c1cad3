// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Overlay fitting
//!
//! Topology flagged with `needs_normalization` lives in its own coordinate
//! space. Before drawing it over the rendered mesh it is recentered on the
//! mesh's bounding box and scaled uniformly so the largest dimensions match.

use nalgebra::{Point3, Vector3};

use crate::builder::unique_edges;
use crate::data::TopologyData;

/// Axis-aligned bounding box in f64 precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Bounds of a point set; `None` when empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let mut points = points.into_iter();
        let first = Point3::from(points.next()?);
        let mut bounds = Self::new(first, first);
        for p in points {
            bounds.expand(Point3::from(p));
        }
        Some(bounds)
    }

    /// Expand bounds to include a point
    #[inline]
    pub fn expand(&mut self, p: Point3<f64>) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    #[inline]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    #[inline]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Largest extent along any axis
    #[inline]
    pub fn max_dimension(&self) -> f64 {
        self.size().max()
    }
}

/// Uniform scale plus recentering from one box onto another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFit {
    pub source_center: Point3<f64>,
    pub target_center: Point3<f64>,
    pub scale: f64,
}

impl OverlayFit {
    pub fn identity() -> Self {
        Self {
            source_center: Point3::origin(),
            target_center: Point3::origin(),
            scale: 1.0,
        }
    }

    /// Fit `source` onto `target`. A flat source keeps scale 1.
    pub fn between(source: &Bounds, target: &Bounds) -> Self {
        let source_dim = source.max_dimension();
        let scale = if source_dim > 0.0 {
            target.max_dimension() / source_dim
        } else {
            1.0
        };
        Self {
            source_center: source.center(),
            target_center: target.center(),
            scale,
        }
    }

    /// Fit for a topology overlay; identity unless the topology asks for
    /// normalization and the model bounds are known.
    pub fn for_topology(topology: &TopologyData, model_bounds: Option<&Bounds>) -> Self {
        if !topology.needs_normalization {
            return Self::identity();
        }
        match (
            model_bounds,
            Bounds::from_points(topology.vertices.iter().copied()),
        ) {
            (Some(target), Some(source)) => Self::between(&source, target),
            _ => Self::identity(),
        }
    }

    #[inline]
    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        let fitted = self.target_center + (Point3::from(p) - self.source_center) * self.scale;
        [fitted.x, fitted.y, fitted.z]
    }
}

/// Line-segment positions for every distinct edge, fitted onto the model.
///
/// Returns `[x0, y0, z0, x1, y1, z1, ...]`, two points per edge.
pub fn edge_segments(topology: &TopologyData, model_bounds: Option<&Bounds>) -> Vec<f32> {
    let fit = OverlayFit::for_topology(topology, model_bounds);
    let edges = unique_edges(&topology.faces);

    let mut positions = Vec::with_capacity(edges.len() * 6);
    for (a, b) in edges {
        let (Some(&pa), Some(&pb)) = (
            topology.vertices.get(a as usize),
            topology.vertices.get(b as usize),
        ) else {
            continue;
        };
        for p in [fit.apply(pa), fit.apply(pb)] {
            positions.extend(p.iter().map(|&c| c as f32));
        }
    }
    positions
}
