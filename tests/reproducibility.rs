mod common;

use common::*;
use stylescore::scorer::explain::FALLBACK_EXPLANATION;
use stylescore::{score_outfit, OutfitFeatures, ScoreConfig, Scorer};

const REFERENCE_JSON: &str = include_str!("../data/outfits/abc123.json");

#[test]
fn test_bundled_reference_matches_fixture() {
    let parsed = OutfitFeatures::from_json(REFERENCE_JSON).expect("reference outfit parses");
    assert_eq!(parsed, reference_outfit());
}

#[test]
fn test_reference_outfit_scores() {
    let scorer = Scorer::new(ScoreConfig::default());
    let result = scorer.score(&reference_outfit()).expect("valid outfit");
    let s = result.subscores;

    assert_eq!(result.version, "scores-0.1.0");
    assert_eq!(s.pattern_balance, 1.0);
    assert_eq!(s.highlight_principle, 1.0);
    assert_eq!(s.texture_mix, 0.85);
    assert_eq!(s.color_harmony, 0.986);
    // Top and bottom cover equal area, a full tolerance off the 1/3 ideal.
    assert_eq!(s.proportion, 0.0);
    // The accessory sits ~17.3 from the accent cluster: a loose echo.
    assert_eq!(s.repetition, 0.7);

    assert!(
        result.style_score > 70.0 && result.style_score < 100.0,
        "score {}",
        result.style_score
    );
    assert!((result.style_score - 75.15).abs() <= 0.051, "score {}", result.style_score);
}

#[test]
fn test_reference_outfit_trace() {
    let result = score_outfit(&reference_outfit(), &ScoreConfig::default()).unwrap();
    let debug = &result.debug;

    let p: Vec<f64> = debug["color"]["p"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(p, vec![0.52, 0.3, 0.18]);

    let dbar = debug["color"]["dbar"].as_f64().unwrap();
    assert!(dbar > 8.0 && dbar < 35.0, "dbar {}", dbar);

    assert_eq!(debug["pattern"]["strong"], 1);
    assert_eq!(debug["pattern"]["totalPatterns"], 1);
    assert_eq!(debug["texture"]["m"], 3);
    assert_eq!(debug["texture"]["glossy"], 1);
    assert_eq!(
        debug["texture"]["materials"],
        serde_json::json!(["denim", "cotton", "leather"])
    );
    assert_eq!(debug["highlight"]["k"], 1);
    assert_eq!(debug["proportion"]["rho"], 0.5);
    assert!(debug["proportion"].get("wn").is_none());

    let min_delta = debug["repetition"]["minDelta"].as_f64().unwrap();
    assert!(min_delta > 10.0 && min_delta <= 18.0, "minDelta {}", min_delta);
}

#[test]
fn test_reference_outfit_explanations() {
    let result = score_outfit(&reference_outfit(), &ScoreConfig::default()).unwrap();
    let joined = result.explanations.join("\n");

    assert!(joined.contains("Color harmony is strong"));
    assert!(joined.contains("Single hero pattern detected"));
    assert!(joined.contains("Good texture variety"));
    assert!(joined.contains("Clear focal point"));
    assert!(joined.contains("top/bottom heavy"));
    assert!(!joined.contains(FALLBACK_EXPLANATION));
    // R = 0.7 falls between both repetition bands.
    assert!(!joined.contains("color repetition"));
    assert!(!joined.contains("color echo"));
}

#[test]
fn test_scoring_is_byte_identical_across_runs() {
    let scorer = Scorer::new(ScoreConfig::default());
    let outfit = reference_outfit();

    let first = serde_json::to_string(&scorer.score(&outfit).unwrap()).unwrap();
    for _ in 0..10 {
        let again = serde_json::to_string(&scorer.score(&outfit).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_cluster_input_order_does_not_matter() {
    let config = ScoreConfig::default();
    let outfit = reference_outfit();

    let mut shuffled = outfit.clone();
    shuffled.color_clusters.reverse();

    let a = score_outfit(&outfit, &config).unwrap();
    let b = score_outfit(&shuffled, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_weights_are_applied_verbatim() {
    let mut config = ScoreConfig::default();
    config.weights.color = 0.0;
    config.weights.pattern = 0.0;
    config.weights.texture = 0.0;
    config.weights.highlight = 0.0;
    config.weights.proportion = 0.0;
    config.weights.repetition = 0.5;

    // Weights sum to 0.5 and are not renormalized: R = 0.7 gives 35.
    let result = score_outfit(&reference_outfit(), &config).unwrap();
    assert_eq!(result.style_score, 35.0);
}

#[test]
fn test_oversized_weights_clamp_to_hundred() {
    let mut config = ScoreConfig::default();
    config.weights.pattern = 5.0;

    let result = score_outfit(&reference_outfit(), &config).unwrap();
    assert_eq!(result.style_score, 100.0);
}

#[test]
fn test_minimal_outfit_scores_within_range() {
    let result = score_outfit(&minimal_outfit(), &ScoreConfig::default()).unwrap();

    assert!((0.0..=100.0).contains(&result.style_score));
    assert_eq!(result.subscores.pattern_balance, 0.7);
    assert_eq!(result.subscores.repetition, 0.3);
    assert_eq!(
        result.debug["repetition"]["reason"],
        "insufficient_clusters"
    );
    assert!(!result.explanations.is_empty());
}

#[test]
fn test_debug_trace_has_every_calculator() {
    let result = score_outfit(&reference_outfit(), &ScoreConfig::default()).unwrap();
    let keys: Vec<&str> = result.debug.keys().map(String::as_str).collect();

    // serde_json::Map keeps keys sorted.
    assert_eq!(
        keys,
        vec!["color", "highlight", "pattern", "proportion", "repetition", "texture"]
    );
    for value in result.debug.values() {
        assert!(value.is_object());
    }
}
