//! Veff CLI Library
//!
//! Helper functions for the `veff-jobs` binary: mode parsing, parameter
//! loading, manifest writing, and the success summary. Kept out of `main` so
//! the file-to-file pipeline is testable without spawning the binary.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use std::fmt::Write as _;
use std::path::Path;

use veff_gen::{GenerationResult, JobParams, Manifest, Mode};

/// How many jobs the success summary lists
const SUMMARY_JOB_COUNT: usize = 5;

/// Parse a mode override string to the core enum
///
/// # Errors
///
/// Returns an error message for anything other than `custom` or `range`.
pub fn parse_mode(mode: &str) -> Result<Mode, String> {
    match mode {
        "custom" => Ok(Mode::Custom),
        "range" => Ok(Mode::Range),
        _ => Err(format!("Unknown mode: {mode} (expected custom or range)")),
    }
}

/// Load the parameter document from a YAML file
///
/// # Errors
///
/// Returns an error message if the file cannot be read or parsed.
pub fn load_params(path: &Path) -> Result<JobParams, String> {
    JobParams::from_file(path)
        .map_err(|e| format!("Error loading parameters from {}: {e}", path.display()))
}

/// Write the manifest to the output path
///
/// # Errors
///
/// Returns an error message if serialization or writing fails.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), String> {
    manifest
        .write_file(path)
        .map_err(|e| format!("Error writing manifest to {}: {e}", path.display()))
}

/// Human-readable success summary: mode used, job count, and the first few
/// jobs.
#[must_use]
pub fn format_summary(result: &GenerationResult, output: &Path) -> String {
    let jobs = &result.manifest.jobs;
    let mut summary = String::new();
    let _ = writeln!(summary, "Mode: {}", result.mode);
    let _ = writeln!(
        summary,
        "Generated {} jobs -> {}",
        jobs.len(),
        output.display()
    );
    let _ = writeln!(summary, "First jobs:");
    for job in jobs.iter().take(SUMMARY_JOB_COUNT) {
        let _ = writeln!(
            summary,
            "  Energy={:.2e} eV, n_events={}",
            job.energy, job.n_events
        );
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use veff_gen::{JobSpec, generate_manifest};

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("custom").expect("mode"), Mode::Custom);
        assert_eq!(parse_mode("range").expect("mode"), Mode::Range);
    }

    #[test]
    fn test_parse_mode_unknown() {
        let err = parse_mode("auto").unwrap_err();
        assert!(err.contains("auto"));
    }

    #[test]
    fn test_load_params_missing_file() {
        let err = load_params(Path::new("/nonexistent/params.yaml")).unwrap_err();
        assert!(err.contains("Error loading parameters"));
    }

    #[test]
    fn test_format_summary_truncates_to_five_jobs() {
        let params = JobParams {
            jobs: Some(
                (1u32..=8)
                    .map(|i| JobSpec {
                        energy: 1e17 * f64::from(i),
                        n_events: 100 * u64::from(i),
                    })
                    .collect(),
            ),
            ..JobParams::default()
        };
        let result = generate_manifest(&params, None).expect("generate");
        let summary = format_summary(&result, Path::new("out.yaml"));

        assert!(summary.contains("Mode: custom"));
        assert!(summary.contains("Generated 8 jobs -> out.yaml"));
        assert_eq!(summary.matches("Energy=").count(), 5);
        assert!(summary.contains("n_events=100"));
    }
}
