// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology extraction methods for the MeshTopo API

use super::TopologyAPI;
use crate::utils::{axis_from_index, warn};
use meshtopo_topology::{extract_text_topology, parse_binary_topology};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
impl TopologyAPI {
    /// Up axis declared by a binary file: 0 (X), 1 (Y), 2 (Z), or undefined
    ///
    /// Example:
    /// ```javascript
    /// const axis = api.detectUpAxis(new Uint8Array(buffer));
    /// if (axis !== undefined) setDetectedAxis(['X', 'Y', 'Z'][axis]);
    /// ```
    #[wasm_bindgen(js_name = detectUpAxis)]
    pub fn detect_up_axis(&self, data: &[u8]) -> Option<u8> {
        meshtopo_core::detect_up_axis(data).map(|axis| axis.index())
    }

    /// Extract topology from a binary file, remapping from `up_axis` (0/1/2)
    ///
    /// Returns `{ vertices, faces, stats, needsNormalization }`, or `null`
    /// when the file cannot be decoded.
    #[wasm_bindgen(js_name = parseFbxTopology)]
    pub fn parse_fbx_topology(&self, data: &[u8], up_axis: u8) -> JsValue {
        let topology = match parse_binary_topology(data, axis_from_index(up_axis)) {
            Ok(topology) => topology,
            Err(e) => {
                warn(&format!("[MeshTopo] Topology not available: {}", e));
                return JsValue::NULL;
            }
        };
        match serde_wasm_bindgen::to_value(&topology) {
            Ok(value) => value,
            Err(e) => {
                warn(&format!("[MeshTopo] Failed to convert topology: {}", e));
                JsValue::NULL
            }
        }
    }

    /// Extract topology from the text of a plain-text model file
    #[wasm_bindgen(js_name = extractObjTopology)]
    pub fn extract_obj_topology(&self, text: &str) -> Result<JsValue, JsValue> {
        let topology = extract_text_topology(text);
        serde_wasm_bindgen::to_value(&topology).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
