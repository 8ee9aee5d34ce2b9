//! Event-count decline laws
//!
//! Maps the normalized position of an energy point within its sweep to an
//! event count. Steeper declines model the reduced statistics needed at the
//! high-energy end of a campaign.

use serde::{Deserialize, Serialize};

/// Decline law applied across the energy sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclineType {
    /// Exponential interpolation in log-space between the event-count bounds
    #[default]
    Exponential,
    /// Linear interpolation between the event-count bounds
    Linear,
    /// No decline: every point gets the maximum event count
    None,
}

impl DeclineType {
    /// Get all decline laws
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Exponential, Self::Linear, Self::None]
    }
}

impl std::fmt::Display for DeclineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exponential => write!(f, "exponential"),
            Self::Linear => write!(f, "linear"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Normalized logarithmic position of `energy` within `[e_min, e_max]`,
/// clamped to `[0, 1]`.
///
/// The normalization is logarithmic for every spacing law, so event-count
/// weighting always tracks orders of magnitude of energy rather than the
/// grid spacing. Defined as `0` when `e_max == e_min`.
#[must_use]
pub fn log_fraction(energy: f64, e_min: f64, e_max: f64) -> f64 {
    if e_max == e_min {
        return 0.0;
    }
    let frac = (energy / e_min).log10() / (e_max / e_min).log10();
    frac.clamp(0.0, 1.0)
}

/// Event count at normalized position `frac`, interpolated between
/// `n_events_min` and `n_events_max` by the given law.
///
/// `decline_factor` controls the steepness: `> 1` concentrates the decline
/// near the high-energy end, `< 1` spreads it toward the low-energy end.
/// The result is clamped to `[n_events_min, n_events_max]` before rounding,
/// so interpolation overshoot can never escape the configured bounds.
#[must_use]
pub fn events_for(
    frac: f64,
    decline_type: DeclineType,
    decline_factor: f64,
    n_events_min: u64,
    n_events_max: u64,
) -> u64 {
    let n_min = n_events_min as f64;
    let n_max = n_events_max as f64;

    let raw = match decline_type {
        DeclineType::None => n_max,
        DeclineType::Linear => n_max - (n_max - n_min) * frac.powf(decline_factor),
        DeclineType::Exponential => {
            // Boundary cases hit the bounds exactly
            if frac == 0.0 {
                n_max
            } else if frac == 1.0 {
                n_min
            } else {
                let log_ratio = (n_min / n_max).log10();
                n_max * 10f64.powf(log_ratio * frac.powf(decline_factor))
            }
        }
    };

    raw.clamp(n_min, n_max).round() as u64
}
