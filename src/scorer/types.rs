use crate::features::Material;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use strum_macros::{AsRefStr, Display};

/// The six subscores, each in [0, 1].
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscores {
    pub color_harmony: f64,
    pub pattern_balance: f64,
    pub texture_mix: f64,
    pub highlight_principle: f64,
    pub proportion: f64,
    pub repetition: f64,
}

impl Subscores {
    /// Values in weight order: C, P, T, H, B, R.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.color_harmony,
            self.pattern_balance,
            self.texture_mix,
            self.highlight_principle,
            self.proportion,
            self.repetition,
        ]
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            color_harmony: f(self.color_harmony),
            pattern_balance: f(self.pattern_balance),
            texture_mix: f(self.texture_mix),
            highlight_principle: f(self.highlight_principle),
            proportion: f(self.proportion),
            repetition: f(self.repetition),
        }
    }
}

/// Final scoring result, ready to be serialized at the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleScore {
    pub version: String,
    pub style_score: f64,
    pub subscores: Subscores,
    pub explanations: Vec<String>,
    /// Advisory trace. Shape may change between versions.
    pub debug: Map<String, Value>,
}

// --- Per-calculator traces ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorTrace {
    /// Normalized shares of the three largest clusters.
    pub p: [f64; 3],
    pub dbar: f64,
    pub r: f64,
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternTrace {
    pub strong: usize,
    pub mild: usize,
    pub total_patterns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureTrace {
    pub materials: BTreeSet<Material>,
    pub m: usize,
    pub glossy: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightTrace {
    pub k: usize,
    pub zs: ZScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScores {
    pub skin: f64,
    pub hue: f64,
    pub texture: f64,
    pub pattern: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionTrace {
    pub rho: f64,
    #[serde(rename = "B1")]
    pub b1: f64,
    /// Body echo, present only when waist and a positive neck were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wn: Option<f64>,
    #[serde(rename = "B2", skip_serializing_if = "Option::is_none")]
    pub b2: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RepetitionFallback {
    InsufficientClusters,
    NoAccessories,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RepetitionTrace {
    #[serde(rename_all = "camelCase")]
    Echo { min_delta: f64, deltas: Vec<f64> },
    Fallback { reason: RepetitionFallback },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTrace {
    pub color: ColorTrace,
    pub pattern: PatternTrace,
    pub texture: TextureTrace,
    pub highlight: HighlightTrace,
    pub proportion: ProportionTrace,
    pub repetition: RepetitionTrace,
}

/// Unrounded engine output: raw subscores, weighted total and trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDetails {
    pub subscores: Subscores,
    pub style_score: f64,
    pub trace: ScoreTrace,
}
