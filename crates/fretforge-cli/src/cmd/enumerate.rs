use crate::cmd::solve::parse_progression;
use crate::reports;
use clap::Args;
use fretforge_core::config::Config;
use fretforge_core::error::{FfResult, FretForgeError};
use fretforge_core::fretboard::Fretboard;
use fretforge_core::instrument::InstrumentConfig;
use fretforge_core::mapper::enumerate_realizations;
use fretforge_core::scorer::Scorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EnumerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Comma-separated pitch set, e.g. "C4,E4,G4".
    #[arg(long)]
    pub pitches: String,

    /// Include unplayable shapes in the listing.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Emit raw JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: EnumerateArgs, instrument: &InstrumentConfig, config: Config) -> FfResult<()> {
    let mut steps = parse_progression(&args.pitches)?;
    let targets = steps.pop().ok_or_else(|| {
        FretForgeError::Config("Provide at least one pitch".to_string())
    })?;

    instrument.validate()?;
    let fretboard = Fretboard::new(instrument);
    let scorer = Scorer::new(fretboard, config.weights, &config.solver)?;

    let mut scored: Vec<_> = enumerate_realizations(
        scorer.fretboard(),
        &targets,
        config.solver.max_span,
    )
    .into_iter()
    .map(|r| {
        let cost = scorer.static_cost(&r);
        (r, cost)
    })
    .filter(|(_, c)| args.all || c.playable)
    .collect();
    scored.sort_by(|a, b| a.1.total.total_cmp(&b.1.total));

    info!("🔎 {} candidates for {}", scored.len(), args.pitches);

    if args.json {
        let rows: Vec<serde_json::Value> = scored
            .iter()
            .map(|(r, c)| {
                serde_json::json!({
                    "tab": r.tab_string(),
                    "cost": c,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("\n{} candidates", scored.len());
    reports::print_candidates(&scored);
    Ok(())
}
