// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MeshTopo Inspect - print the authored topology of a model file.
//!
//! ```text
//! meshtopo-inspect <file.fbx|file.obj> [X|Y|Z]
//! ```
//!
//! The optional axis overrides `MESHTOPO_UP_AXIS`. Output is a JSON report
//! with face and edge counts; binary files also report their container
//! version and declared up axis.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,meshtopo=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => anyhow::bail!("Usage: meshtopo-inspect <file.fbx|file.obj> [X|Y|Z]"),
    };
    if let Some(axis) = args.next() {
        config.up_axis = axis.parse().context("Invalid up axis argument")?;
    }

    tracing::info!(
        file = %path.display(),
        up_axis = %config.up_axis,
        max_depth = config.max_depth,
        "Inspecting model"
    );

    let report = report::inspect(&path, &config)?;

    tracing::debug!(
        quads = report.stats.quads,
        tris = report.stats.tris,
        ngons = report.stats.ngons,
        edges = report.stats.edges,
        "Topology extracted"
    );

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
