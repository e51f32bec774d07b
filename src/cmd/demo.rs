use crate::reports;
use stylescore::api::{ErrorResponse, ScoringService};
use stylescore::OutfitFeatures;

const REFERENCE_OUTFIT: &str = include_str!("../../data/outfits/abc123.json");

/// Scores the bundled reference outfit and prints the breakdown and trace.
pub fn run(service: &ScoringService) -> Result<(), ErrorResponse> {
    let features = OutfitFeatures::from_json(REFERENCE_OUTFIT)?;
    let score = service.score(&features)?;

    println!("Config version: {}", service.config().version);
    reports::print_score_table(&features.outfit_id, &score, &service.config().weights);

    println!("Debug:");
    for (key, value) in &score.debug {
        println!("  {}: {}", key, value);
    }
    Ok(())
}
