use super::types::PatternTrace;
use crate::config::PatternThresholds;
use crate::features::{GarmentFeatures, PatternType};
use crate::util::clamp01;

/// Pattern Balance (P), the Rule of One for prints: one strong hero pattern
/// with everything else calm scores best.
pub fn score_pattern_balance(
    garments: &[GarmentFeatures],
    cfg: &PatternThresholds,
) -> (f64, PatternTrace) {
    let mut strong = 0usize;
    let mut mild = 0usize;
    let mut total = 0usize;

    for g in garments.iter().filter(|g| g.pattern_type != PatternType::None) {
        total += 1;
        let s = g.pattern_strength;
        if s >= cfg.strong {
            strong += 1;
        } else if s >= cfg.mild {
            mild += 1;
        }
    }

    let p = match (strong, mild) {
        (1, 0) => 1.0,
        (0, m) if m <= 2 => 0.7,
        _ => (1.0 - 0.25 * (strong as f64 - 1.0) - 0.15 * mild as f64).max(0.0),
    };

    (
        clamp01(p),
        PatternTrace {
            strong,
            mild,
            total_patterns: total,
        },
    )
}
