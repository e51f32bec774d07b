use crate::error::ConfigError;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_VERSION: &str = "scores-0.1.0";
pub const DEFAULT_CONFIG_PATH: &str = "config/scores-0.1.0.json";

/// Versioned, read-only scoring parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreConfig {
    pub version: String,
    pub weights: ScoreWeights,
    pub color: ColorThresholds,
    pub pattern: PatternThresholds,
    pub texture: TextureParams,
    pub highlight: HighlightParams,
    pub proportion: ProportionParams,
}

/// Subscore weights, applied verbatim (no normalization).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreWeights {
    #[serde(rename = "C")]
    pub color: f64,
    #[serde(rename = "P")]
    pub pattern: f64,
    #[serde(rename = "T")]
    pub texture: f64,
    #[serde(rename = "H")]
    pub highlight: f64,
    #[serde(rename = "B")]
    pub proportion: f64,
    #[serde(rename = "R")]
    pub repetition: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorThresholds {
    /// Below this mean distance the palette reads as muddy.
    pub d_min: f64,
    /// Above this mean distance the palette reads as clashing.
    pub d_max: f64,
    /// Decay length of the harmony penalty outside [d_min, d_max].
    pub tau_h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatternThresholds {
    pub strong: f64,
    pub mild: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextureParams {
    pub gloss_bonus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HighlightParams {
    pub z_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProportionParams {
    pub ideal_top: f64,
    pub tolerance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            color: 0.25,
            pattern: 0.15,
            texture: 0.10,
            highlight: 0.20,
            proportion: 0.20,
            repetition: 0.10,
        }
    }
}

impl Default for ColorThresholds {
    fn default() -> Self {
        Self {
            d_min: 8.0,
            d_max: 35.0,
            tau_h: 10.0,
        }
    }
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            strong: 0.6,
            mild: 0.3,
        }
    }
}

impl Default for TextureParams {
    fn default() -> Self {
        Self { gloss_bonus: 0.1 }
    }
}

impl Default for HighlightParams {
    fn default() -> Self {
        Self { z_threshold: 1.0 }
    }
}

impl Default for ProportionParams {
    fn default() -> Self {
        Self {
            ideal_top: 0.33,
            tolerance: 0.17,
        }
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_CONFIG_VERSION.to_string(),
            weights: ScoreWeights::default(),
            color: ColorThresholds::default(),
            pattern: PatternThresholds::default(),
            texture: TextureParams::default(),
            highlight: HighlightParams::default(),
            proportion: ProportionParams::default(),
        }
    }
}

impl ScoreWeights {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.color,
            self.pattern,
            self.texture,
            self.highlight,
            self.proportion,
            self.repetition,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl ScoreConfig {
    /// Loads a config document. A missing file yields the embedded baseline;
    /// anything else that goes wrong is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Config '{}' not found. Using embedded {} defaults.",
                    path.display(),
                    DEFAULT_CONFIG_VERSION
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_json(&content).map_err(|e| match e {
            ConfigError::Malformed { message, .. } => ConfigError::Malformed {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        info!("Loaded config {} from '{}'", config.version, path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Malformed {
            path: "<inline>".into(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(invalid("version", "must not be empty"));
        }

        let w = &self.weights;
        let numbers = [
            ("weights.C", w.color),
            ("weights.P", w.pattern),
            ("weights.T", w.texture),
            ("weights.H", w.highlight),
            ("weights.B", w.proportion),
            ("weights.R", w.repetition),
            ("color.dMin", self.color.d_min),
            ("color.dMax", self.color.d_max),
            ("color.tauH", self.color.tau_h),
            ("pattern.strong", self.pattern.strong),
            ("pattern.mild", self.pattern.mild),
            ("texture.glossBonus", self.texture.gloss_bonus),
            ("highlight.zThreshold", self.highlight.z_threshold),
            ("proportion.idealTop", self.proportion.ideal_top),
            ("proportion.tolerance", self.proportion.tolerance),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }

        if self.color.tau_h <= 0.0 {
            return Err(invalid("color.tauH", "must be > 0"));
        }
        if self.color.d_min > self.color.d_max {
            return Err(invalid("color.dMin", "must not exceed color.dMax"));
        }
        if self.pattern.mild > self.pattern.strong {
            return Err(invalid("pattern.mild", "must not exceed pattern.strong"));
        }
        if self.proportion.tolerance <= 0.0 {
            return Err(invalid("proportion.tolerance", "must be > 0"));
        }

        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &WeightOverrides) {
        macro_rules! update_if_present {
            ($src:ident, $dst:ident) => {
                if let Some(v) = overrides.$src {
                    self.weights.$dst = v;
                }
            };
        }

        update_if_present!(weight_c, color);
        update_if_present!(weight_p, pattern);
        update_if_present!(weight_t, texture);
        update_if_present!(weight_h, highlight);
        update_if_present!(weight_b, proportion);
        update_if_present!(weight_r, repetition);
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Command-line weight overrides, layered over the loaded document.
#[derive(Args, Debug, Clone, Default)]
pub struct WeightOverrides {
    #[arg(long, global = true)]
    pub weight_c: Option<f64>,
    #[arg(long, global = true)]
    pub weight_p: Option<f64>,
    #[arg(long, global = true)]
    pub weight_t: Option<f64>,
    #[arg(long, global = true)]
    pub weight_h: Option<f64>,
    #[arg(long, global = true)]
    pub weight_b: Option<f64>,
    #[arg(long, global = true)]
    pub weight_r: Option<f64>,
}

impl WeightOverrides {
    pub fn is_empty(&self) -> bool {
        [
            self.weight_c,
            self.weight_p,
            self.weight_t,
            self.weight_h,
            self.weight_b,
            self.weight_r,
        ]
        .iter()
        .all(Option::is_none)
    }
}
