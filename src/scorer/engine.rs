use super::explain::explain;
use super::harmony::score_color_harmony;
use super::highlight::score_highlight_principle;
use super::pattern::score_pattern_balance;
use super::proportion::score_proportion;
use super::repetition::score_repetition;
use super::texture::score_texture_mix;
use super::types::{ScoreDetails, ScoreTrace, StyleScore, Subscores};
use crate::config::ScoreConfig;
use crate::features::OutfitFeatures;
use crate::util::{clamp01, round_to};
use serde_json::{json, Map, Value};

/// Runs all six calculators and the weighted sum. No rounding happens here.
pub fn score_details(features: &OutfitFeatures, cfg: &ScoreConfig) -> ScoreDetails {
    let clusters = features.sorted_clusters();
    let garments = &features.garments;

    let (c, color) = score_color_harmony(&clusters, &cfg.color);
    let (p, pattern) = score_pattern_balance(garments, &cfg.pattern);
    let (t, texture) = score_texture_mix(garments, &cfg.texture);
    let (h, highlight) = score_highlight_principle(&features.domain_z, &cfg.highlight);
    let (b, proportion) =
        score_proportion(&features.thirds_area, features.body.as_ref(), &cfg.proportion);
    let (r, repetition) = score_repetition(garments, &clusters);

    let subscores = Subscores {
        color_harmony: c,
        pattern_balance: p,
        texture_mix: t,
        highlight_principle: h,
        proportion: b,
        repetition: r,
    }
    .map(clamp01);

    let weighted: f64 = cfg
        .weights
        .as_array()
        .iter()
        .zip(subscores.as_array())
        .map(|(w, s)| w * s)
        .sum();

    ScoreDetails {
        subscores,
        style_score: (100.0 * weighted).clamp(0.0, 100.0),
        trace: ScoreTrace {
            color,
            pattern,
            texture,
            highlight,
            proportion,
            repetition,
        },
    }
}

/// Rounds the engine output and attaches explanations and the debug trace.
pub fn finalize(details: ScoreDetails, version: &str) -> StyleScore {
    let explanations = explain(&details.subscores);

    StyleScore {
        version: version.to_string(),
        style_score: round_to(details.style_score, 1),
        subscores: details.subscores.map(|v| round_to(v, 3)),
        explanations,
        debug: trace_to_map(&details.trace),
    }
}

fn trace_to_map(trace: &ScoreTrace) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("color".into(), json!(trace.color));
    map.insert("pattern".into(), json!(trace.pattern));
    map.insert("texture".into(), json!(trace.texture));
    map.insert("highlight".into(), json!(trace.highlight));
    map.insert("proportion".into(), json!(trace.proportion));
    map.insert("repetition".into(), json!(trace.repetition));
    map
}
