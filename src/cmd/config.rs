use stylescore::api::ErrorResponse;
use stylescore::{ScoreConfig, StyleError};

/// Prints the effective config, overrides included, as a JSON document.
pub fn run(config: &ScoreConfig) -> Result<(), ErrorResponse> {
    let json = config.to_json_pretty().map_err(StyleError::from)?;
    println!("{}", json);
    Ok(())
}
