//! Manifest assembly
//!
//! Single linear pass from a parsed parameter document to the output
//! manifest: resolve the mode, produce the job list (explicit pass-through or
//! grid-plus-decline), and wrap it with the campaign metadata. Each stage
//! either returns a valid value or fails immediately; there is no partial
//! manifest.

use crate::decline::{events_for, log_fraction};
use crate::error::{Error, Result};
use crate::manifest::{JobSpec, Manifest};
use crate::params::{JobParams, Mode, select_mode};
use crate::range::RangeSpec;

/// Outcome of a generation run: the resolved mode plus the assembled
/// manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    /// Mode that was actually used (after override/inference)
    pub mode: Mode,
    /// The assembled manifest
    pub manifest: Manifest,
}

/// Generate the job manifest from a parameter document.
///
/// Pure and deterministic: the same document and override always produce the
/// same manifest.
///
/// # Errors
///
/// Returns a configuration error for an undeterminable mode, a missing or
/// invalid section for the selected mode, or invalid sweep parameters.
pub fn generate_manifest(
    params: &JobParams,
    mode_override: Option<Mode>,
) -> Result<GenerationResult> {
    let mode = select_mode(params, mode_override)?;

    let jobs = match mode {
        Mode::Custom => custom_jobs(params)?,
        Mode::Range => {
            // select_mode guarantees the section exists
            let Some(range) = params.range.as_ref() else {
                return Err(Error::Configuration(
                    "mode 'range' requires a 'range' section".to_string(),
                ));
            };
            range_jobs(range)?
        }
    };

    Ok(GenerationResult {
        mode,
        manifest: Manifest {
            conda_env: params.conda_env.clone(),
            jobs,
        },
    })
}

/// Echo the explicit job list through, re-checking the job invariants.
fn custom_jobs(params: &JobParams) -> Result<Vec<JobSpec>> {
    let Some(jobs) = params.jobs.as_ref().filter(|jobs| !jobs.is_empty()) else {
        return Err(Error::Configuration(
            "mode 'custom' requires a non-empty 'jobs' list".to_string(),
        ));
    };
    jobs.iter()
        .map(|job| JobSpec::new(job.energy, job.n_events))
        .collect()
}

/// Generate jobs from the sweep: energy grid, then the decline law per point.
fn range_jobs(range: &RangeSpec) -> Result<Vec<JobSpec>> {
    let energies = range.energies()?;
    let jobs = energies
        .into_iter()
        .map(|energy| {
            let frac = log_fraction(energy, range.e_min, range.e_max);
            let n_events = events_for(
                frac,
                range.decline_type,
                range.decline_factor,
                range.n_events_min,
                range.n_events_max,
            );
            JobSpec { energy, n_events }
        })
        .collect();
    Ok(jobs)
}
