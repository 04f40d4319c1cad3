// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inspection report types.

use std::path::Path;

use anyhow::{bail, Context};
use meshtopo_core::{decode_with, up_axis_of, UpAxis};
use meshtopo_topology::{extract_binary_topology, extract_text_topology, TopologyStats};
use serde::Serialize;

use crate::config::Config;

/// Input format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Binary,
    Text,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "fbx" => Some(Format::Binary),
            "obj" => Some(Format::Text),
            _ => None,
        }
    }
}

/// Summary printed for one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub file: String,
    pub format: Format,
    /// Container version (binary only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Up axis declared in the file's global settings (binary only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_up_axis: Option<UpAxis>,
    /// Up axis positions were remapped from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_up_axis: Option<UpAxis>,
    pub vertices: usize,
    pub faces: usize,
    pub stats: TopologyStats,
    pub needs_normalization: bool,
}

/// Read and inspect one file.
pub fn inspect(path: &Path, config: &Config) -> anyhow::Result<Report> {
    let format = match Format::from_path(path) {
        Some(format) => format,
        None => bail!("Unsupported file type: {}", path.display()),
    };
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    inspect_bytes(&path.display().to_string(), format, &data, config)
}

pub fn inspect_bytes(
    file: &str,
    format: Format,
    data: &[u8],
    config: &Config,
) -> anyhow::Result<Report> {
    match format {
        Format::Binary => {
            let document = decode_with(data, config.decode_config())
                .with_context(|| format!("Failed to decode {}", file))?;
            let declared = up_axis_of(&document);
            if let Some(axis) = declared {
                if axis != config.up_axis {
                    tracing::warn!(
                        declared = %axis,
                        selected = %config.up_axis,
                        "Selected up axis differs from the file's declaration"
                    );
                }
            }
            let topology = extract_binary_topology(&document, config.up_axis);
            Ok(Report {
                file: file.to_string(),
                format,
                version: Some(document.version),
                declared_up_axis: declared,
                selected_up_axis: Some(config.up_axis),
                vertices: topology.vertices.len(),
                faces: topology.faces.len(),
                stats: topology.stats,
                needs_normalization: topology.needs_normalization,
            })
        }
        Format::Text => {
            let text = String::from_utf8_lossy(data);
            let topology = extract_text_topology(&text);
            Ok(Report {
                file: file.to_string(),
                format,
                version: None,
                declared_up_axis: None,
                selected_up_axis: None,
                vertices: topology.vertices.len(),
                faces: topology.faces.len(),
                stats: topology.stats,
                needs_normalization: topology.needs_normalization,
            })
        }
    }
}
