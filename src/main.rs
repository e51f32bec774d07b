use clap::{Parser, Subcommand};
use std::process;
use stylescore::api::{ErrorKind, ErrorResponse, ScoringService};
use stylescore::config::{WeightOverrides, DEFAULT_CONFIG_PATH};
use stylescore::ScoreConfig;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(flatten)]
    weights: WeightOverrides,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one OutfitFeatures document.
    Score(cmd::score::ScoreArgs),
    /// Score a JSON array of OutfitFeatures documents in parallel.
    Batch(cmd::batch::BatchArgs),
    /// Print the effective scoring config.
    Config,
    /// Score the bundled reference outfit.
    Demo,
}

fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Config => 1,
        ErrorKind::Validation => 2,
        ErrorKind::Internal => 3,
    }
}

fn load_config(cli: &Cli) -> Result<ScoreConfig, ErrorResponse> {
    let mut config = ScoreConfig::load(&cli.config)?;

    if !cli.weights.is_empty() {
        info!("Applying weight overrides from the command line");
        config.apply_overrides(&cli.weights);
        config.validate()?;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{}", e.error);
        // Structured failure on stdout for callers piping JSON.
        if let Ok(json) = serde_json::to_string(&e) {
            println!("{}", json);
        }
        process::exit(exit_code(e.kind));
    }
}

fn run(cli: Cli) -> Result<(), ErrorResponse> {
    let service = ScoringService::new(load_config(&cli)?);

    match cli.command {
        Commands::Score(args) => cmd::score::run(args, &service),
        Commands::Batch(args) => cmd::batch::run(args, &service),
        Commands::Config => cmd::config::run(service.config()),
        Commands::Demo => cmd::demo::run(&service),
    }
}
