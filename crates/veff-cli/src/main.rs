//! Veff Jobs CLI
//!
//! Generates the YAML job manifest consumed by the downstream
//! neutrino-detector simulation pipeline.

use clap::Parser;
use std::path::PathBuf;

use veff_cli::{format_summary, load_params, parse_mode, write_manifest};
use veff_gen::generate_manifest;

#[derive(Parser)]
#[command(name = "veff-jobs")]
#[command(about = "Generate job manifests for neutrino detector simulations", long_about = None)]
#[command(version)]
struct Cli {
    /// Input YAML file with job parameters
    #[arg(long, default_value = "configs/job_params.yaml")]
    params: PathBuf,

    /// Output manifest YAML file
    #[arg(long, default_value = "snake_config.yaml")]
    output: PathBuf,

    /// Job generation mode: custom uses the predefined job list, range
    /// generates from the energy range (inferred from the parameters when
    /// omitted)
    #[arg(long, value_parser = ["custom", "range"])]
    mode: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // clap restricts the values; parse_mode maps them to the core enum
    let mode_override = match cli.mode.as_deref().map(parse_mode).transpose() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let params = match load_params(&cli.params) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let result = match generate_manifest(&params, mode_override) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_manifest(&result.manifest, &cli.output) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    print!("{}", format_summary(&result, &cli.output));
}
