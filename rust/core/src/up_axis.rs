// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Up-axis metadata lookup
//!
//! Reads `GlobalSettings.Properties70.UpAxis`. The value is advisory: it
//! describes the authoring tool's convention and is independent of the axis
//! a viewer chooses when remapping coordinates.

use crate::axis::UpAxis;
use crate::normalize::PROPERTY_TABLE;
use crate::parser::decode;
use crate::tree::{Document, Node};

const GLOBAL_SETTINGS: &str = "GlobalSettings";
const UP_AXIS: &str = "UpAxis";

/// Up axis declared in a decoded document, if present and an integer in 0..=2.
pub fn up_axis_of(document: &Document) -> Option<UpAxis> {
    document
        .lookup(GLOBAL_SETTINGS, &[PROPERTY_TABLE, UP_AXIS])
        .and_then(Node::as_scalar)
        .and_then(|value| value.as_i64())
        .and_then(UpAxis::from_index)
}

/// Decode `data` and report its declared up axis; `None` on any failure.
pub fn detect_up_axis(data: &[u8]) -> Option<UpAxis> {
    match decode(data) {
        Ok(document) => up_axis_of(&document),
        Err(e) => {
            tracing::debug!(error = %e, "Up-axis detection skipped");
            None
        }
    }
}
