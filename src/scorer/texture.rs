use super::types::TextureTrace;
use crate::config::TextureParams;
use crate::features::GarmentFeatures;
use crate::util::clamp01;
use std::collections::BTreeSet;

/// Gloss index at or above which a piece counts as glossy.
pub const GLOSS_THRESHOLD: f64 = 0.7;

/// Texture Mix (T): peaks at two or three distinct materials, with a bonus
/// for exactly one glossy piece.
pub fn score_texture_mix(garments: &[GarmentFeatures], cfg: &TextureParams) -> (f64, TextureTrace) {
    let materials: BTreeSet<_> = garments.iter().map(|g| g.material).collect();
    let m = materials.len();

    let base = clamp01(1.0 - (m as f64 - 2.5).abs().min(2.0) / 2.0);

    let glossy = garments
        .iter()
        .filter(|g| g.gloss_index >= GLOSS_THRESHOLD)
        .count();
    let bonus = if glossy == 1 { cfg.gloss_bonus } else { 0.0 };

    let t = clamp01((base + bonus).min(1.0));

    (t, TextureTrace { materials, m, glossy })
}
