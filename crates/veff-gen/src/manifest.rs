//! Job and manifest documents
//!
//! The manifest is the sole artifact crossing the system boundary: the
//! execution-environment descriptor plus an ordered list of jobs, serialized
//! to YAML for the downstream event-list generator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// One unit of simulation work: a primary energy and an event count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Primary neutrino energy in electron-volts
    pub energy: f64,
    /// Number of events to simulate at this energy
    pub n_events: u64,
}

impl JobSpec {
    /// Create a job, enforcing the invariants `energy > 0` and
    /// `n_events >= 1`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending value.
    pub fn new(energy: f64, n_events: u64) -> Result<Self> {
        if !energy.is_finite() || energy <= 0.0 {
            return Err(Error::Configuration(format!(
                "job energy must be positive, got {energy:e}"
            )));
        }
        if n_events < 1 {
            return Err(Error::Configuration(format!(
                "job n_events must be at least 1, got {n_events}"
            )));
        }
        Ok(Self { energy, n_events })
    }
}

/// The complete job manifest handed to the simulation pipeline.
///
/// Order of `jobs` is exactly the order produced by generation; callers must
/// not rely on any re-sorting being applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Execution-environment descriptor, passed through verbatim from the
    /// input parameter document
    pub conda_env: String,
    /// Ordered list of simulation jobs
    pub jobs: Vec<JobSpec>,
}

impl Manifest {
    /// Load a manifest from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Convert to YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::from)
    }

    /// Convert to pretty-printed JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Write the manifest to a YAML file, preceded by a generated-file
    /// comment header.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        use std::fmt::Write;

        let mut yaml = String::new();
        yaml.push_str("# Auto-generated simulation job manifest\n");
        let _ = writeln!(yaml, "# Jobs: {}", self.jobs.len());
        yaml.push('\n');
        yaml.push_str(&self.to_yaml()?);

        std::fs::write(path, yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_spec_new() {
        let job = JobSpec::new(1e18, 100).expect("valid job");
        assert_eq!(job.energy, 1e18);
        assert_eq!(job.n_events, 100);
    }

    #[test]
    fn test_job_spec_rejects_zero_energy() {
        let err = JobSpec::new(0.0, 100).unwrap_err();
        assert!(err.to_string().contains("energy must be positive"));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_job_spec_rejects_negative_energy() {
        let err = JobSpec::new(-1e17, 100).unwrap_err();
        assert!(err.to_string().contains("-1e17"));
    }

    #[test]
    fn test_job_spec_rejects_zero_events() {
        let err = JobSpec::new(1e18, 0).unwrap_err();
        assert!(err.to_string().contains("n_events must be at least 1"));
    }

    #[test]
    fn test_manifest_yaml_round_trip() {
        let manifest = Manifest {
            conda_env: "envs/nuradio_env.yaml".to_string(),
            jobs: vec![
                JobSpec {
                    energy: 1e17,
                    n_events: 50_000,
                },
                JobSpec {
                    energy: 1e18,
                    n_events: 5_000,
                },
            ],
        };
        let yaml = manifest.to_yaml().expect("serialize");
        let parsed = Manifest::from_yaml(&yaml).expect("parse");
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_manifest_yaml_shape() {
        let manifest = Manifest {
            conda_env: "envs/nuradio_env.yaml".to_string(),
            jobs: vec![JobSpec {
                energy: 1e18,
                n_events: 100,
            }],
        };
        let yaml = manifest.to_yaml().expect("serialize");
        assert!(yaml.contains("conda_env: envs/nuradio_env.yaml"));
        assert!(yaml.contains("energy:"));
        assert!(yaml.contains("n_events: 100"));
    }

    #[test]
    fn test_manifest_to_json() {
        let manifest = Manifest {
            conda_env: "env".to_string(),
            jobs: vec![JobSpec {
                energy: 1e18,
                n_events: 100,
            }],
        };
        let json = manifest.to_json().expect("serialize");
        assert!(json.contains("\"conda_env\""));
        assert!(json.contains("\"n_events\": 100"));
    }

    #[test]
    fn test_write_file_includes_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("manifest.yaml");
        let manifest = Manifest {
            conda_env: "env".to_string(),
            jobs: vec![JobSpec {
                energy: 1e18,
                n_events: 100,
            }],
        };
        manifest.write_file(&path).expect("write");
        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.starts_with("# Auto-generated simulation job manifest"));
        assert!(content.contains("# Jobs: 1"));
        // Header comments must not break parsing
        let parsed = Manifest::from_file(&path).expect("parse back");
        assert_eq!(parsed, manifest);
    }
}
