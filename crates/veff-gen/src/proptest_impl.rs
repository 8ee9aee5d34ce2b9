//! Proptest strategies for the core types
//!
//! Used by the property-test suite to sweep random valid `RangeSpec`s
//! through the generation pipeline.

use proptest::prelude::*;

use crate::decline::DeclineType;
use crate::range::{RangeSpec, RangeType};

/// Strategy for generating spacing laws
pub fn range_type_strategy() -> impl Strategy<Value = RangeType> {
    prop_oneof![
        Just(RangeType::Log),
        Just(RangeType::Linear),
        Just(RangeType::Geometric),
    ]
}

/// Strategy for generating decline laws
pub fn decline_type_strategy() -> impl Strategy<Value = DeclineType> {
    prop_oneof![
        Just(DeclineType::Exponential),
        Just(DeclineType::Linear),
        Just(DeclineType::None),
    ]
}

/// Strategy for generating valid sweep descriptions.
///
/// Bounds span realistic campaign energies (1e15..1e21 eV) with at least a
/// 10% separation, event-count bounds are ordered, and the decline factor
/// stays in the range campaigns actually use.
pub fn range_spec_strategy() -> impl Strategy<Value = RangeSpec> {
    (
        1e15f64..1e18,
        1.1f64..1e4,
        range_type_strategy(),
        1.0f64..10.0,
        prop::option::of(1u64..60),
        1u64..20_000,
        0u64..200_000,
        decline_type_strategy(),
        0.25f64..4.0,
    )
        .prop_map(
            |(
                e_min,
                span,
                range_type,
                points_per_decade,
                total_points,
                n_events_min,
                extra_events,
                decline_type,
                decline_factor,
            )| {
                RangeSpec {
                    e_min,
                    e_max: e_min * span,
                    range_type,
                    points_per_decade,
                    total_points,
                    n_events_min,
                    n_events_max: n_events_min + extra_events,
                    decline_type,
                    decline_factor,
                }
            },
        )
}
