use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use fretforge_core::config::ScoringWeights;
use fretforge_core::instrument::InstrumentConfig;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Instrument definition JSON; defaults to the built-in standard guitar.
    #[arg(global = true, short, long)]
    instrument: Option<String>,

    /// Scoring weights JSON; CLI flags override individual fields.
    #[arg(global = true, long)]
    weights: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the K best fingering sequences for a pitch-set progression.
    Solve(cmd::solve::SolveArgs),
    /// List every playable candidate for a single pitch set.
    Enumerate(cmd::enumerate::EnumerateArgs),
}

fn main() {
    // Keep stdout clean for tables/JSON; diagnostics go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let instrument = match &cli.instrument {
        Some(path) => {
            info!("📂 Loading instrument: {}", path);
            InstrumentConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => InstrumentConfig::standard_guitar(),
    };
    info!(
        "🎸 {}: {} strings, {} frets, {:.0} mm scale",
        instrument.name,
        instrument.string_count(),
        instrument.fret_count,
        instrument.scale_length_mm
    );

    let (mut config, cli_weights, sub_matches) = match &cli.command {
        Commands::Solve(args) => (
            args.config.clone(),
            args.config.weights.clone(),
            matches.subcommand_matches("solve"),
        ),
        Commands::Enumerate(args) => (
            args.config.clone(),
            args.config.weights.clone(),
            matches.subcommand_matches("enumerate"),
        ),
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading weights: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
        if let Some(sub) = sub_matches {
            file_weights.merge_from_cli(&cli_weights, sub);
        }
        config.weights = file_weights;
    }

    let outcome = match cli.command {
        Commands::Solve(args) => cmd::solve::run(args, &instrument, config),
        Commands::Enumerate(args) => cmd::enumerate::run(args, &instrument, config),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
