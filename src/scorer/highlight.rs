use super::types::{HighlightTrace, ZScores};
use crate::config::HighlightParams;
use crate::features::DomainZ;
use crate::util::{clamp01, round_to};

/// Highlight Principle (H): exactly one salient domain among skin, hue,
/// texture and pattern.
pub fn score_highlight_principle(z: &DomainZ, cfg: &HighlightParams) -> (f64, HighlightTrace) {
    let k = z
        .as_array()
        .iter()
        .filter(|&&v| v >= cfg.z_threshold)
        .count();

    let h = match k {
        1 => 1.0,
        0 => 0.6,
        _ => (1.0 - 0.25 * (k as f64 - 1.0)).max(0.0),
    };

    let trace = HighlightTrace {
        k,
        zs: ZScores {
            skin: round_to(z.skin, 2),
            hue: round_to(z.hue, 2),
            texture: round_to(z.texture, 2),
            pattern: round_to(z.pattern, 2),
        },
    };

    (clamp01(h), trace)
}
