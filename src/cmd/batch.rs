use super::read_input;
use crate::reports;
use clap::Args;
use stylescore::api::{ErrorResponse, ScoringService};
use stylescore::error::ValidationError;
use stylescore::{OutfitFeatures, StyleError};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON array of OutfitFeatures documents, or `-` for stdin.
    pub input: String,

    /// Also write one CSV row per outfit to this path.
    #[arg(long)]
    pub csv: Option<String>,

    /// Print the full results as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, service: &ScoringService) -> Result<(), ErrorResponse> {
    let body = read_input(&args.input)?;
    let outfits: Vec<OutfitFeatures> = serde_json::from_str(&body)
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;

    info!("Scoring {} outfits", outfits.len());
    let entries = service.score_batch(&outfits);

    if args.json {
        let json = serde_json::to_string_pretty(&entries).map_err(StyleError::from)?;
        println!("{}", json);
    } else {
        reports::print_batch_summary(&entries);
    }

    if let Some(path) = &args.csv {
        reports::write_batch_csv(&entries, path)?;
        info!("Wrote {} rows to {}", entries.len(), path);
    }

    Ok(())
}
