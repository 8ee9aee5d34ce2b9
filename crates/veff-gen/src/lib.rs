//! Veff Job-Parameter Generation Engine
//!
//! Generates the manifest of simulation jobs (energy, event-count pairs) that
//! drives the downstream neutrino-detector effective-volume pipeline. Jobs
//! come either from an explicit list in the parameter document or from a
//! declarative energy-range sweep with a configurable spacing law and
//! event-count decline law.
//!
//! The whole engine is a pure, deterministic, single-pass transformation:
//! parameter document in, manifest out. All I/O lives at the edges.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod decline;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod params;
pub mod proptest_impl;
pub mod range;

pub use decline::{DeclineType, events_for, log_fraction};
pub use error::{Error, Result};
pub use generate::{GenerationResult, generate_manifest};
pub use manifest::{JobSpec, Manifest};
pub use params::{JobParams, Mode, select_mode};
pub use range::{RangeSpec, RangeType};
