//! Configuration for a harness run.
//!
//! This module defines the settings that parameterize a test run. It provides:
//! 1. **Defaults:** Baseline values used when a field is omitted.
//! 2. **Structure:** `HarnessConfig` (seeding, reporting, trial count, device layout).
//! 3. **Loading:** JSON from a string or a file.
//!
//! Configuration is supplied as JSON by the CLI (`--config`) or built with
//! `HarnessConfig::default()` and overridden field by field.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::HarnessError;
use crate::soc::DeviceKind;

/// Default configuration constants for the harness.
mod defaults {
    use crate::soc::DeviceKind;

    /// Randomized trials per parameterized test case.
    pub const TRIALS: usize = 8;

    /// Cycles `run` executes when no count is given.
    pub const MAX_CYCLES: u64 = 64;

    /// Colour pass/fail lines.
    pub const fn colour() -> bool {
        true
    }

    pub const fn trials() -> usize {
        TRIALS
    }

    pub const fn max_cycles() -> u64 {
        MAX_CYCLES
    }

    /// RAM in slot 0, everything else unmapped.
    pub fn devices() -> Vec<DeviceKind> {
        DeviceKind::MAIN_LAYOUT.to_vec()
    }
}

/// Root configuration of a harness run.
///
/// Every field is optional in JSON.
///
/// # Examples
///
/// ```
/// use rvharness_core::HarnessConfig;
///
/// let json = r#"{
///     "seed": 42,
///     "colour": false,
///     "trials": 3,
///     "filter": "alu",
///     "devices": ["Memory", "Null"]
/// }"#;
///
/// let config = HarnessConfig::from_json(json).unwrap();
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.trials, 3);
/// assert_eq!(config.filter.as_deref(), Some("alu"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Run seed; case `i` draws from `seed + i`. Taken from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Colour the pass/fail report lines.
    #[serde(default = "defaults::colour")]
    pub colour: bool,

    /// Randomized trials per parameterized test case.
    #[serde(default = "defaults::trials")]
    pub trials: usize,

    /// Only run cases whose name contains this substring.
    #[serde(default)]
    pub filter: Option<String>,

    /// Device kind per bus slot, slot 0 first.
    #[serde(default = "defaults::devices")]
    pub devices: Vec<DeviceKind>,

    /// Cycle budget for free-running a loaded program.
    #[serde(default = "defaults::max_cycles")]
    pub max_cycles: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: None,
            colour: defaults::colour(),
            trials: defaults::TRIALS,
            filter: None,
            devices: defaults::devices(),
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

impl HarnessConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Config` if `json` is malformed or names an unknown field.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Io` if the file cannot be read and `HarnessError::Config` if
    /// its contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Returns `true` if the case called `name` passes the filter.
    pub fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|needle| name.contains(needle))
    }
}
