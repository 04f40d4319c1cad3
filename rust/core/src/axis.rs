// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertical axis selection and coordinate remapping

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which axis is treated as vertical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpAxis {
    X = 0,
    #[default]
    Y = 1,
    Z = 2,
}

/// Unrecognized axis name or index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown up axis {0:?}, expected X, Y, Z or 0, 1, 2")]
pub struct ParseAxisError(pub String);

impl UpAxis {
    /// Axis for a metadata index (0 = X, 1 = Y, 2 = Z)
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(UpAxis::X),
            1 => Some(UpAxis::Y),
            2 => Some(UpAxis::Z),
            _ => None,
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UpAxis::X => "X",
            UpAxis::Y => "Y",
            UpAxis::Z => "Z",
        }
    }

    /// Map a file-space position into the viewer's Y-up space.
    ///
    /// X-up swaps X and Y; Z-up rotates -90° about X.
    #[inline]
    pub fn remap(self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        match self {
            UpAxis::X => [y, x, z],
            UpAxis::Y => [x, y, z],
            UpAxis::Z => [x, z, -y],
        }
    }

    /// Inverse of [`UpAxis::remap`].
    #[inline]
    pub fn unmap(self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        match self {
            UpAxis::X => [y, x, z],
            UpAxis::Y => [x, y, z],
            UpAxis::Z => [x, -z, y],
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpAxis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" | "0" => Ok(UpAxis::X),
            "Y" | "1" => Ok(UpAxis::Y),
            "Z" | "2" => Ok(UpAxis::Z),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}
