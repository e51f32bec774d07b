use super::read_input;
use crate::reports;
use clap::{Args, ValueEnum};
use stylescore::api::{ErrorResponse, ScoringService};
use stylescore::{OutfitFeatures, StyleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// OutfitFeatures JSON file, or `-` for stdin.
    pub input: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn run(args: ScoreArgs, service: &ScoringService) -> Result<(), ErrorResponse> {
    let body = read_input(&args.input)?;
    let features = OutfitFeatures::from_json(&body)?;
    let score = service.score(&features)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&score).map_err(StyleError::from)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            reports::print_score_table(&features.outfit_id, &score, &service.config().weights);
        }
    }
    Ok(())
}
