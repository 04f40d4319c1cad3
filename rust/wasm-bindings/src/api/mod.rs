// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for MeshTopo
//!
//! Entry points used by the viewer when a model is loaded. Failures never
//! throw: binary extraction yields `null` and logs a console warning, so the
//! rendered mesh loads regardless.

mod overlay;
mod parsing;

use wasm_bindgen::prelude::*;

/// Topology extraction API
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct TopologyAPI {}

#[wasm_bindgen]
impl TopologyAPI {
    /// Create the API
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        crate::utils::set_panic_hook();
        Self {}
    }

    /// Whether the buffer is a binary container (only those carry topology)
    #[wasm_bindgen(js_name = isBinaryFbx)]
    pub fn is_binary_fbx(&self, data: &[u8]) -> bool {
        meshtopo_core::is_binary_container(data)
    }
}
