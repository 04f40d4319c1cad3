// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for topology data.
//!
//! The wire shape is what the browser viewer consumes:
//! `{ vertices: [[x, y, z], ...], faces: [[i, ...], ...],
//!    stats: { quads, tris, ngons, edges }, needsNormalization }`.

use crate::data::TopologyData;
use crate::error::{Error, Result};

impl TopologyData {
    /// Serializes the topology to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serializes the topology to an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Restores topology from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{TopologyData, TopologyStats};

    #[test]
    fn wire_field_names() {
        let topology = TopologyData {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            faces: vec![vec![0, 1, 2]],
            stats: TopologyStats {
                quads: 0,
                tris: 1,
                ngons: 0,
                edges: 3,
            },
            needs_normalization: true,
        };

        let value: serde_json::Value = serde_json::from_str(&topology.to_json().unwrap()).unwrap();
        assert_eq!(value["needsNormalization"], true);
        assert_eq!(value["stats"]["tris"], 1);
        assert_eq!(value["stats"]["edges"], 3);
        assert_eq!(value["faces"][0][2], 2);
        assert_eq!(value["vertices"][1][0], 1.0);

        let restored = TopologyData::from_json(&topology.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored, topology);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(TopologyData::from_json("{\"vertices\": 3}").is_err());
    }
}
