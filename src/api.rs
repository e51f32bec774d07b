use crate::config::ScoreConfig;
use crate::error::{ConfigError, StyleError, ValidationError};
use crate::features::OutfitFeatures;
use crate::scorer::{Scorer, StyleScore};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use strum_macros::{AsRefStr, Display};
use tracing::{info, warn};

/// Shared, read-only state required to serve scoring requests.
#[derive(Debug, Clone)]
pub struct ScoringService {
    scorer: Scorer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    Config,
    Validation,
    Internal,
}

/// The single failure shape returned at the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

impl ErrorResponse {
    pub fn status(&self) -> u16 {
        match self.kind {
            ErrorKind::Validation => 400,
            ErrorKind::Config | ErrorKind::Internal => 500,
        }
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(e: ValidationError) -> Self {
        Self {
            error: e.to_string(),
            kind: ErrorKind::Validation,
        }
    }
}

impl From<ConfigError> for ErrorResponse {
    fn from(e: ConfigError) -> Self {
        Self {
            error: e.to_string(),
            kind: ErrorKind::Config,
        }
    }
}

impl From<StyleError> for ErrorResponse {
    fn from(e: StyleError) -> Self {
        match e {
            StyleError::Validation(v) => v.into(),
            StyleError::Config(c) => c.into(),
            other => Self {
                error: other.to_string(),
                kind: ErrorKind::Internal,
            },
        }
    }
}

/// Per-outfit result of a batch run. Provenance fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub outfit_id: String,
    pub extraction_version: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchOutcome {
    Score(StyleScore),
    Error(ErrorResponse),
}

impl BatchEntry {
    pub fn score(&self) -> Option<&StyleScore> {
        match &self.outcome {
            BatchOutcome::Score(s) => Some(s),
            BatchOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResponse> {
        match &self.outcome {
            BatchOutcome::Score(_) => None,
            BatchOutcome::Error(e) => Some(e),
        }
    }
}

impl ScoringService {
    pub fn new(config: ScoreConfig) -> Self {
        Self {
            scorer: Scorer::new(config),
        }
    }

    pub fn from_shared(config: Arc<ScoreConfig>) -> Self {
        Self {
            scorer: Scorer::with_shared(config),
        }
    }

    /// Resolves the config once, before any request is served.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let scorer = Scorer::from_path(path)?;
        info!("API: scoring with config {}", scorer.config().version);
        Ok(Self { scorer })
    }

    pub fn config(&self) -> &ScoreConfig {
        self.scorer.config()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn score(&self, features: &OutfitFeatures) -> Result<StyleScore, ValidationError> {
        self.scorer.score(features)
    }

    /// Parses, validates and scores one request body.
    pub fn score_json(&self, body: &str) -> Result<StyleScore, ErrorResponse> {
        let features = OutfitFeatures::from_json(body)?;
        Ok(self.scorer.score(&features)?)
    }

    /// Full request cycle: returns an HTTP-style status and a JSON body.
    pub fn handle(&self, body: &str) -> (u16, String) {
        let result = self
            .score_json(body)
            .and_then(|score| serde_json::to_string(&score).map_err(|e| internal(e.to_string())));

        match result {
            Ok(json) => (200, json),
            Err(err) => {
                warn!("API: request rejected ({}): {}", err.kind, err.error);
                let body = serde_json::to_string(&err).unwrap_or_else(|_| {
                    r#"{"error":"failed to encode error","kind":"internal"}"#.to_string()
                });
                (err.status(), body)
            }
        }
    }

    /// Scores many outfits in parallel. Output order matches input order.
    pub fn score_batch(&self, outfits: &[OutfitFeatures]) -> Vec<BatchEntry> {
        outfits
            .par_iter()
            .map(|features| BatchEntry {
                outfit_id: features.outfit_id.clone(),
                extraction_version: features.extraction_version.clone(),
                outcome: match self.scorer.score(features) {
                    Ok(score) => BatchOutcome::Score(score),
                    Err(e) => BatchOutcome::Error(e.into()),
                },
            })
            .collect()
    }
}

fn internal(message: String) -> ErrorResponse {
    ErrorResponse {
        error: message,
        kind: ErrorKind::Internal,
    }
}
