//! File-to-file pipeline tests for the CLI helper layer
//!
//! Exercises the same load → generate → write path the binary runs, against
//! real files in a temporary directory.

use std::path::Path;

use veff_cli::{format_summary, load_params, parse_mode, write_manifest};
use veff_gen::{Manifest, Mode, generate_manifest};

fn write_params(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("job_params.yaml");
    std::fs::write(&path, content).expect("write params");
    path
}

#[test]
fn test_range_params_file_to_manifest_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params_path = write_params(
        dir.path(),
        r"
range:
  E_min: 1.0e17
  E_max: 1.0e19
  range_type: log
  total_points: 3
  n_events_min: 1000
  n_events_max: 10000
  decline_type: linear
",
    );
    let output_path = dir.path().join("snake_config.yaml");

    let params = load_params(&params_path).expect("load");
    let result = generate_manifest(&params, None).expect("generate");
    write_manifest(&result.manifest, &output_path).expect("write");

    let manifest = Manifest::from_file(&output_path).expect("read back");
    assert_eq!(manifest.conda_env, "envs/nuradio_env.yaml");
    let counts: Vec<u64> = manifest.jobs.iter().map(|j| j.n_events).collect();
    assert_eq!(counts, vec![10_000, 5_500, 1_000]);

    let summary = format_summary(&result, &output_path);
    assert!(summary.contains("Mode: range"));
    assert!(summary.contains("Generated 3 jobs"));
}

#[test]
fn test_custom_params_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params_path = write_params(
        dir.path(),
        r"
conda_env: envs/my_env.yaml
jobs:
  - energy: 1.0e18
    n_events: 100
",
    );
    let output_path = dir.path().join("out.yaml");

    let params = load_params(&params_path).expect("load");
    let result = generate_manifest(&params, None).expect("generate");
    assert_eq!(result.mode, Mode::Custom);
    write_manifest(&result.manifest, &output_path).expect("write");

    let manifest = Manifest::from_file(&output_path).expect("read back");
    assert_eq!(manifest.conda_env, "envs/my_env.yaml");
    assert_eq!(manifest.jobs.len(), 1);
    assert_eq!(manifest.jobs[0].n_events, 100);
}

#[test]
fn test_mode_override_from_cli_string() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params_path = write_params(
        dir.path(),
        r"
jobs:
  - energy: 1.0e18
    n_events: 100
range:
  total_points: 4
",
    );

    let params = load_params(&params_path).expect("load");
    let mode = parse_mode("range").expect("mode");
    let result = generate_manifest(&params, Some(mode)).expect("generate");
    assert_eq!(result.mode, Mode::Range);
    assert_eq!(result.manifest.jobs.len(), 4);
}

#[test]
fn test_undeterminable_mode_fails_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params_path = write_params(dir.path(), "conda_env: envs/x.yaml\n");

    let params = load_params(&params_path).expect("load");
    let err = generate_manifest(&params, None).unwrap_err();
    assert!(err.to_string().contains("cannot determine generation mode"));
}

#[test]
fn test_inverted_bounds_fail_before_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params_path = write_params(dir.path(), "range: {E_min: 1.0e19, E_max: 1.0e17}\n");

    let params = load_params(&params_path).expect("load");
    assert!(generate_manifest(&params, None).is_err());
}
