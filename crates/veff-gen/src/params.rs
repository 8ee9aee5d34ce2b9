//! Input parameter document and generation-mode selection

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::JobSpec;
use crate::range::RangeSpec;

/// Job generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Use the explicit job list from the parameter document verbatim
    Custom,
    /// Generate jobs procedurally from the energy-range description
    Range,
}

impl Mode {
    /// Get all modes
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Custom, Self::Range]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom => write!(f, "custom"),
            Self::Range => write!(f, "range"),
        }
    }
}

/// Parsed input parameter document.
///
/// Recognized keys are `jobs` (custom mode), `range` (range mode), and
/// `conda_env` (execution-environment descriptor, passed through verbatim to
/// the manifest). Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobParams {
    /// Explicit job list for custom mode
    #[serde(default)]
    pub jobs: Option<Vec<JobSpec>>,
    /// Declarative sweep description for range mode
    #[serde(default)]
    pub range: Option<RangeSpec>,
    /// Execution-environment descriptor forwarded into the manifest
    #[serde(default = "default_conda_env")]
    pub conda_env: String,
}

fn default_conda_env() -> String {
    "envs/nuradio_env.yaml".to_string()
}

impl Default for JobParams {
    fn default() -> Self {
        Self {
            jobs: None,
            range: None,
            conda_env: default_conda_env(),
        }
    }
}

impl JobParams {
    /// Load a parameter document from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a parameter document from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// True when the document carries a non-empty explicit job list
    #[must_use]
    pub fn has_jobs(&self) -> bool {
        self.jobs.as_ref().is_some_and(|jobs| !jobs.is_empty())
    }
}

/// Resolve the generation mode from the document and an optional override.
///
/// An explicit override takes precedence over inference, but still requires
/// the matching section to be present. With no override, a non-empty `jobs`
/// list selects custom mode, then a `range` section selects range mode.
///
/// # Errors
///
/// Returns a configuration error when the override's section is missing or
/// when neither section allows the mode to be inferred.
pub fn select_mode(params: &JobParams, mode_override: Option<Mode>) -> Result<Mode> {
    match mode_override {
        Some(Mode::Custom) => {
            if params.has_jobs() {
                Ok(Mode::Custom)
            } else {
                Err(Error::Configuration(
                    "mode 'custom' requires a non-empty 'jobs' list".to_string(),
                ))
            }
        }
        Some(Mode::Range) => {
            if params.range.is_some() {
                Ok(Mode::Range)
            } else {
                Err(Error::Configuration(
                    "mode 'range' requires a 'range' section".to_string(),
                ))
            }
        }
        None => {
            if params.has_jobs() {
                Ok(Mode::Custom)
            } else if params.range.is_some() {
                Ok(Mode::Range)
            } else {
                Err(Error::Configuration(
                    "cannot determine generation mode: no 'jobs' or 'range' section".to_string(),
                ))
            }
        }
    }
}
