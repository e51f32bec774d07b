use super::types::{RepetitionFallback, RepetitionTrace};
use crate::color::ciede2000;
use crate::features::{ColorCluster, GarmentFeatures};
use crate::util::round_to;

/// Distance at or below which an accessory reads as a clear echo.
pub const ECHO_STRONG: f64 = 10.0;
/// Distance at or below which an accessory reads as a loose echo.
pub const ECHO_LOOSE: f64 = 18.0;
pub const FALLBACK_SCORE: f64 = 0.3;

/// Repetition (R): does any secondary piece repeat the accent color (the
/// second-largest cluster)?
///
/// `clusters` must already be sorted by descending share.
pub fn score_repetition(
    garments: &[GarmentFeatures],
    clusters: &[ColorCluster],
) -> (f64, RepetitionTrace) {
    let Some(accent) = clusters.get(1) else {
        return (
            FALLBACK_SCORE,
            RepetitionTrace::Fallback {
                reason: RepetitionFallback::InsufficientClusters,
            },
        );
    };

    let deltas: Vec<f64> = garments
        .iter()
        .filter(|g| g.garment_type.is_secondary())
        .map(|g| ciede2000(g.color_lab, accent.lab))
        .collect();

    let Some(min_delta) = deltas.iter().copied().reduce(f64::min) else {
        return (
            FALLBACK_SCORE,
            RepetitionTrace::Fallback {
                reason: RepetitionFallback::NoAccessories,
            },
        );
    };

    let r = if min_delta <= ECHO_STRONG {
        1.0
    } else if min_delta <= ECHO_LOOSE {
        0.7
    } else {
        FALLBACK_SCORE
    };

    let trace = RepetitionTrace::Echo {
        min_delta: round_to(min_delta, 2),
        deltas: deltas.iter().take(5).map(|&d| round_to(d, 2)).collect(),
    };

    (r, trace)
}
