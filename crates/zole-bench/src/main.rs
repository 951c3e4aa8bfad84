use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use zole_bench::config::{BenchConfig, ResolvedOutputs};
use zole_bench::logging::init_logging;
use zole_bench::runner::DealRunner;
use zole_core::AppInfo;
use zole_core::model::deck::Deck;

/// Seeded deal harness for three-hand Zole.
#[derive(Debug, Parser)]
#[command(
    name = "zole-bench",
    author,
    version = AppInfo::version(),
    about = "Deterministic Zole deal harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of hands to deal.
    #[arg(long, value_name = "HANDS")]
    hands: Option<usize>,

    /// Override the RNG seed for deal generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no hands are dealt).
    #[arg(long)]
    validate_only: bool,

    /// Print the 26-card catalog as JSON and exit.
    #[arg(long)]
    print_deck: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_deck {
        let entries: Vec<_> = Deck::standard().iter().map(|c| c.entry()).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut config = BenchConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(hands) = cli.hands {
        config.deals.hands = hands;
    }

    if let Some(seed) = cli.seed {
        config.deals.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let hands = config.deals.hands;

    println!(
        "{} {} ({}): loaded configuration '{run_id}' ({hands} hands)",
        AppInfo::name(),
        AppInfo::version(),
        AppInfo::codename()
    );

    if cli.validate_only {
        println!("Validation-only mode: no hands dealt.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;

    let runner = DealRunner::new(config, outputs);
    let summary = runner
        .run()
        .with_context(|| format!("running deal harness '{run_id}'"))?;
    println!(
        "Dealt {} hands for '{run_id}': {} rows at {}",
        summary.hands_dealt,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    println!(
        "  Average skat: {:.2} points, {:.2} trumps",
        summary.stats.avg_skat_points, summary.stats.avg_skat_trumps
    );
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}
