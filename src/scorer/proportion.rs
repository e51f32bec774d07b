use super::types::ProportionTrace;
use crate::config::ProportionParams;
use crate::features::{BodyMeasurements, ThirdsArea};
use crate::util::{clamp01, round_to};

const DEGENERATE_AREA: f64 = 1e-6;
const IDEAL_WAIST_NECK: f64 = 0.2;
const WAIST_NECK_SCALE: f64 = 0.1;

/// Proportion (B): top-to-bottom visual ratio against the configured ideal,
/// optionally blended with a waist/neck echo when body measurements exist.
pub fn score_proportion(
    thirds: &ThirdsArea,
    body: Option<&BodyMeasurements>,
    cfg: &ProportionParams,
) -> (f64, ProportionTrace) {
    let total = thirds.top + thirds.bottom;
    let rho = if total < DEGENERATE_AREA {
        cfg.ideal_top
    } else {
        thirds.top / total
    };

    let b1 = clamp01(1.0 - (rho - cfg.ideal_top).abs() / cfg.tolerance);

    let mut trace = ProportionTrace {
        rho: round_to(rho, 3),
        b1: round_to(b1, 3),
        wn: None,
        b2: None,
    };

    let b = match body.and_then(|m| Some((m.waist?, m.neck?))) {
        Some((waist, neck)) if neck > 0.0 => {
            let wn = waist / neck;
            let b2 = clamp01((-(wn - IDEAL_WAIST_NECK).abs() / WAIST_NECK_SCALE).exp());
            trace.wn = Some(round_to(wn, 3));
            trace.b2 = Some(round_to(b2, 3));
            0.8 * b1 + 0.2 * b2
        }
        _ => b1,
    };

    (clamp01(b), trace)
}
