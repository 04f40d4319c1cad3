// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inspector configuration loaded from environment variables.

use meshtopo_core::{DecodeConfig, UpAxis};

/// Inspector configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Up axis binary files are assumed to be authored with.
    pub up_axis: UpAxis,
    /// Maximum record nesting accepted by the binary decoder.
    pub max_depth: usize,
    /// Pretty-print the JSON report.
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DecodeConfig::default();
        Self {
            up_axis: var("MESHTOPO_UP_AXIS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            max_depth: var("MESHTOPO_MAX_DEPTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_depth),
            pretty: var("MESHTOPO_PRETTY")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }

    pub fn decode_config(&self) -> DecodeConfig {
        DecodeConfig {
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_with(&[]);
        assert_eq!(config.up_axis, UpAxis::Y);
        assert_eq!(config.max_depth, 256);
        assert!(config.pretty);
    }

    #[test]
    fn overrides_and_fallbacks() {
        let config = config_with(&[
            ("MESHTOPO_UP_AXIS", "z"),
            ("MESHTOPO_MAX_DEPTH", "32"),
            ("MESHTOPO_PRETTY", "false"),
        ]);
        assert_eq!(config.up_axis, UpAxis::Z);
        assert_eq!(config.decode_config().max_depth, 32);
        assert!(!config.pretty);

        let config = config_with(&[("MESHTOPO_UP_AXIS", "w"), ("MESHTOPO_MAX_DEPTH", "deep")]);
        assert_eq!(config.up_axis, UpAxis::Y);
        assert_eq!(config.max_depth, 256);
    }
}
