// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Overlay line generation for the MeshTopo API

use super::TopologyAPI;
use meshtopo_topology::{edge_segments, Bounds, TopologyData};
use nalgebra::Point3;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl TopologyAPI {
    /// Line-segment positions for every distinct topology edge
    ///
    /// `model_min`/`model_max` are the rendered mesh's bounding box corners
    /// (`[x, y, z]`). Topology that needs normalization is fitted onto that
    /// box; pass empty arrays to skip fitting.
    ///
    /// Example:
    /// ```javascript
    /// const box = new THREE.Box3().setFromObject(model);
    /// const positions = api.edgeSegments(topology, box.min.toArray(), box.max.toArray());
    /// geometry.setAttribute('position', new THREE.BufferAttribute(positions, 3));
    /// ```
    #[wasm_bindgen(js_name = edgeSegments)]
    pub fn edge_segments(
        &self,
        topology: JsValue,
        model_min: Vec<f64>,
        model_max: Vec<f64>,
    ) -> Result<js_sys::Float32Array, JsValue> {
        let topology: TopologyData = serde_wasm_bindgen::from_value(topology)
            .map_err(|e| JsValue::from_str(&format!("Invalid topology: {}", e)))?;

        let bounds = match (model_min.as_slice(), model_max.as_slice()) {
            ([x0, y0, z0], [x1, y1, z1]) => Some(Bounds::new(
                Point3::new(*x0, *y0, *z0),
                Point3::new(*x1, *y1, *z1),
            )),
            _ => None,
        };

        let positions = edge_segments(&topology, bounds.as_ref());
        Ok(js_sys::Float32Array::from(&positions[..]))
    }
}
