//! Example: Generating a Job Manifest
//!
//! This example demonstrates how to describe an energy sweep in code and
//! turn it into a simulation job manifest.
//!
//! Run with: `cargo run --example generate_manifest -p veff-gen`

#![allow(clippy::missing_panics_doc)]

use veff_gen::{DeclineType, JobParams, RangeSpec, RangeType, generate_manifest};

fn main() {
    // Describe a two-decade sweep with an exponential decline in statistics
    let range = RangeSpec {
        e_min: 1e17,
        e_max: 1e19,
        range_type: RangeType::Log,
        total_points: Some(11),
        n_events_min: 5_000,
        n_events_max: 50_000,
        decline_type: DeclineType::Exponential,
        ..RangeSpec::default()
    };

    let params = JobParams {
        range: Some(range),
        ..JobParams::default()
    };

    let result = generate_manifest(&params, None).expect("valid parameters");

    println!(
        "Generated {} jobs in {} mode:",
        result.manifest.jobs.len(),
        result.mode
    );
    println!();

    for (i, job) in result.manifest.jobs.iter().enumerate() {
        println!(
            "Job {:2}:  Energy={:.2e} eV  n_events={}",
            i + 1,
            job.energy,
            job.n_events
        );
    }

    println!();
    println!("Manifest YAML:");
    println!("{}", result.manifest.to_yaml().expect("serializable"));
}
