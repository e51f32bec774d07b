pub mod engine;
pub mod explain;
pub mod harmony;
pub mod highlight;
pub mod pattern;
pub mod proportion;
pub mod repetition;
pub mod texture;
pub mod types;

pub use self::types::{ScoreDetails, StyleScore, Subscores};
use crate::config::ScoreConfig;
use crate::error::{ConfigError, ValidationError};
use crate::features::OutfitFeatures;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Stateless scoring engine bound to one frozen config. Cloning is cheap and
/// clones share the config.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: Arc<ScoreConfig>,
}

impl Scorer {
    pub fn new(config: ScoreConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn with_shared(config: Arc<ScoreConfig>) -> Self {
        Self { config }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ScoreConfig::load(path).map(Self::new)
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    pub fn shared_config(&self) -> Arc<ScoreConfig> {
        Arc::clone(&self.config)
    }

    /// Validates the features, then scores them.
    pub fn score(&self, features: &OutfitFeatures) -> Result<StyleScore, ValidationError> {
        features.validate()?;
        let details = self.score_details(features);

        debug!(
            outfit_id = %features.outfit_id,
            extraction = %features.extraction_version,
            score = details.style_score,
            c = details.subscores.color_harmony,
            p = details.subscores.pattern_balance,
            t = details.subscores.texture_mix,
            h = details.subscores.highlight_principle,
            b = details.subscores.proportion,
            r = details.subscores.repetition,
            "Scored outfit"
        );

        Ok(engine::finalize(details, &self.config.version))
    }

    /// Raw engine output without validation or rounding.
    pub fn score_details(&self, features: &OutfitFeatures) -> ScoreDetails {
        engine::score_details(features, &self.config)
    }
}

/// One-shot convenience wrapper around [`Scorer::score`].
pub fn score_outfit(
    features: &OutfitFeatures,
    config: &ScoreConfig,
) -> Result<StyleScore, ValidationError> {
    features.validate()?;
    let details = engine::score_details(features, config);
    Ok(engine::finalize(details, &config.version))
}
