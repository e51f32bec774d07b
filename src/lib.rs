pub mod api;
pub mod color;
pub mod config;
pub mod error;
pub mod features;
pub mod scorer;
pub mod util;
// cmd and reports are binary modules (declared in main.rs).

pub use crate::color::ciede2000;
pub use crate::config::ScoreConfig;
pub use crate::error::{ConfigError, StyleError, StyleResult, ValidationError};
pub use crate::features::OutfitFeatures;
pub use crate::scorer::{score_outfit, Scorer, StyleScore};
