//! Energy-range sweep description and grid generation
//!
//! A `RangeSpec` declaratively describes an energy sweep: bounds, spacing
//! law, point count, and the event-count decline policy applied per point.

use serde::{Deserialize, Serialize};

use crate::decline::DeclineType;
use crate::error::{Error, Result};

/// Spacing law for the generated energy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    /// Points uniform in log10-space
    #[default]
    Log,
    /// Points uniform in linear space
    Linear,
    /// Constant-ratio progression, computed via the ratio formulation rather
    /// than logarithms (rounding differs from `Log` in the last few ulps,
    /// which downstream consumers rely on)
    Geometric,
}

impl RangeType {
    /// Get all spacing laws
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Log, Self::Linear, Self::Geometric]
    }
}

impl std::fmt::Display for RangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::Linear => write!(f, "linear"),
            Self::Geometric => write!(f, "geometric"),
        }
    }
}

/// Declarative description of an energy sweep.
///
/// Every field has a documented default, so an empty `range:` section yields
/// the standard campaign: 5e16 eV to 1e20 eV, log spacing at 5 points per
/// decade, exponential decline from 50k down to 5k events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// Lower energy bound in eV (inclusive)
    #[serde(rename = "E_min", default = "default_e_min")]
    pub e_min: f64,
    /// Upper energy bound in eV (inclusive)
    #[serde(rename = "E_max", default = "default_e_max")]
    pub e_max: f64,
    /// Spacing law for the grid
    #[serde(default)]
    pub range_type: RangeType,
    /// Grid density used when `range_type` is `log` and `total_points` is
    /// not given
    #[serde(default = "default_points_per_decade")]
    pub points_per_decade: f64,
    /// Explicit point count; takes precedence over `points_per_decade`
    #[serde(default)]
    pub total_points: Option<u64>,
    /// Event count at the high-energy end of the decline
    #[serde(default = "default_n_events_min")]
    pub n_events_min: u64,
    /// Event count at the low-energy end of the decline
    #[serde(default = "default_n_events_max")]
    pub n_events_max: u64,
    /// Decline law mapping grid position to event count
    #[serde(default)]
    pub decline_type: DeclineType,
    /// Steepness exponent of the decline law
    #[serde(default = "default_decline_factor")]
    pub decline_factor: f64,
}

fn default_e_min() -> f64 {
    5e16
}

fn default_e_max() -> f64 {
    1e20
}

fn default_points_per_decade() -> f64 {
    5.0
}

fn default_n_events_min() -> u64 {
    5_000
}

fn default_n_events_max() -> u64 {
    50_000
}

fn default_decline_factor() -> f64 {
    1.0
}

/// Fallback point count when neither `total_points` nor a log-spaced
/// `points_per_decade` derivation applies
const DEFAULT_N_POINTS: usize = 14;

impl Default for RangeSpec {
    fn default() -> Self {
        Self {
            e_min: default_e_min(),
            e_max: default_e_max(),
            range_type: RangeType::default(),
            points_per_decade: default_points_per_decade(),
            total_points: None,
            n_events_min: default_n_events_min(),
            n_events_max: default_n_events_max(),
            decline_type: DeclineType::default(),
            decline_factor: default_decline_factor(),
        }
    }
}

impl RangeSpec {
    /// Check the sweep invariants.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending value when
    /// `E_min <= 0`, `E_max <= E_min`, `n_events_max < n_events_min`,
    /// `n_events_min < 1`, or `decline_factor <= 0`.
    pub fn validate(&self) -> Result<()> {
        if !self.e_min.is_finite() || self.e_min <= 0.0 {
            return Err(Error::Configuration(format!(
                "E_min must be positive, got {:e}",
                self.e_min
            )));
        }
        if self.e_max <= self.e_min {
            return Err(Error::Configuration(format!(
                "E_max ({:e}) must be greater than E_min ({:e})",
                self.e_max, self.e_min
            )));
        }
        if self.n_events_min < 1 {
            return Err(Error::Configuration(
                "n_events_min must be at least 1".to_string(),
            ));
        }
        if self.n_events_max < self.n_events_min {
            return Err(Error::Configuration(format!(
                "n_events_max ({}) must be >= n_events_min ({})",
                self.n_events_max, self.n_events_min
            )));
        }
        if !self.decline_factor.is_finite() || self.decline_factor <= 0.0 {
            return Err(Error::Configuration(format!(
                "decline_factor must be positive, got {}",
                self.decline_factor
            )));
        }
        Ok(())
    }

    /// Number of grid points this sweep generates.
    ///
    /// `total_points` wins when given (floored at 1); otherwise log-spaced
    /// sweeps derive the count from `points_per_decade` over the decade span,
    /// and everything else falls back to the fixed default.
    #[must_use]
    pub fn n_points(&self) -> usize {
        if let Some(total) = self.total_points {
            return total.max(1) as usize;
        }
        if self.range_type == RangeType::Log {
            let decades = self.e_max.log10() - self.e_min.log10();
            return (self.points_per_decade * decades).floor() as usize + 1;
        }
        DEFAULT_N_POINTS
    }

    /// Generate the ordered, strictly increasing energy grid spanning
    /// `[E_min, E_max]` inclusive.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the sweep invariants do not hold.
    pub fn energies(&self) -> Result<Vec<f64>> {
        self.validate()?;
        Ok(energy_grid(
            self.e_min,
            self.e_max,
            self.range_type,
            self.n_points(),
        ))
    }
}

/// Build an `n`-point grid between `e_min` and `e_max` under the given
/// spacing law. A single-point grid is just `[e_min]`.
fn energy_grid(e_min: f64, e_max: f64, range_type: RangeType, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![e_min];
    }
    let steps = (n - 1) as f64;

    match range_type {
        RangeType::Log => {
            let lo = e_min.log10();
            let hi = e_max.log10();
            let step = (hi - lo) / steps;
            (0..n)
                .map(|i| 10f64.powf(lo + step * i as f64))
                .collect()
        }
        RangeType::Linear => {
            let step = (e_max - e_min) / steps;
            (0..n).map(|i| e_min + step * i as f64).collect()
        }
        RangeType::Geometric => {
            // Constant-ratio progression by cumulative multiplication, not
            // via log10/powf
            let ratio = (e_max / e_min).powf(1.0 / steps);
            let mut grid = Vec::with_capacity(n);
            let mut value = e_min;
            for _ in 0..n {
                grid.push(value);
                value *= ratio;
            }
            grid
        }
    }
}
