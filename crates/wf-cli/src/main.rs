//! WheelForge demo driver
//!
//! Runs scripted spins against a roster file and prints the winners.
//!
//! Usage:
//!   wheelforge --spins 3                       - three spins on the default roster
//!   wheelforge -e roster.txt --strategy friction --seed 42
//!   wheelforge --group HR --batch 2 --remove --export winners.csv

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, ValueEnum};

use wf_engine::{SpinConfig, StrategyKind};
use wf_ledger::{export_filename, write_csv};
use wf_picker::{WheelController, WheelRenderer};

#[derive(Parser)]
#[command(name = "wheelforge", about = "Prize wheel spin driver")]
struct Cli {
    /// Roster file, one entry per line (`Name` or `Name | Group`)
    #[arg(short, long)]
    entries: Option<PathBuf>,

    /// Rotation strategy
    #[arg(long, value_enum, default_value_t = Strategy::Timed)]
    strategy: Strategy,

    /// Physics tuning file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Number of spins to run
    #[arg(short, long, default_value_t = 1)]
    spins: u32,

    /// Winners drawn per spin
    #[arg(short, long, default_value_t = 1)]
    batch: usize,

    /// Prize category label
    #[arg(short, long, default_value = "Round 1")]
    category: String,

    /// Restrict the wheel to one group
    #[arg(short, long)]
    group: Option<String>,

    /// Remove winners from the roster after each spin
    #[arg(long)]
    remove: bool,

    /// Write the winner history as CSV (a directory gets a dated name)
    #[arg(long)]
    export: Option<PathBuf>,

    /// Emit spin outcomes as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum Strategy {
    /// Fixed five-second eased spin
    Timed,
    /// Velocity decay under friction
    Friction,
}

impl From<Strategy> for StrategyKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Timed => StrategyKind::TimedEase,
            Strategy::Friction => StrategyKind::FrictionDecay,
        }
    }
}

/// Logs wheel geometry instead of drawing it.
struct TraceRenderer;

impl WheelRenderer for TraceRenderer {
    fn render(&mut self, labels: &[String], angle: f64) {
        log::trace!("wheel: {} segment(s) at {angle:.3} rad", labels.len());
    }
}

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SpinConfig::from_json_file(path)
            .with_context(|| format!("loading physics config {}", path.display()))?,
        None => SpinConfig::standard(),
    };

    let mut controller = WheelController::with_config(cli.strategy.into(), config);
    if let Some(path) = &cli.entries {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading roster {}", path.display()))?;
        controller.set_raw_text(text);
    }
    if let Some(seed) = cli.seed {
        controller.seed(seed);
    }
    if let Some(group) = &cli.group {
        controller.set_group(group.clone());
    }
    controller.set_category(cli.category.clone());
    controller.set_batch_size(cli.batch);
    controller.set_remove_winner(cli.remove);

    log::info!(
        "{} active entries (of {}), spinning for '{}'",
        controller.active_count(),
        controller.total_count(),
        controller.selected_group()
    );

    let mut renderer = TraceRenderer;
    let mut now_ms = 0.0;
    for round in 1..=cli.spins {
        if !controller.spin(now_ms) {
            log::warn!("spin {round} rejected: the active pool is empty");
            break;
        }

        let deadline = now_ms + 60_000.0;
        let outcome = loop {
            now_ms += FRAME_MS;
            if now_ms > deadline {
                bail!("spin {round} did not settle");
            }
            controller.render_to(&mut renderer);
            if let Some(outcome) = controller.tick(now_ms) {
                break outcome;
            }
        };

        if cli.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("spin {round}: {}", outcome.batch.join(", "));
        }
        controller.acknowledge();
    }

    if !cli.json && !controller.ledger().is_empty() {
        println!("\nwinners by category:");
        for (category, winners) in controller.ledger().by_category() {
            println!("  {category} ({} total)", winners.len());
            for winner in winners.iter().rev() {
                println!(
                    "    {} at {}",
                    winner.name,
                    winner.timestamp.format("%H:%M:%S")
                );
            }
        }
    }

    if let Some(path) = &cli.export {
        let path = if path.is_dir() {
            path.join(export_filename(Utc::now().date_naive()))
        } else {
            path.clone()
        };
        write_csv(&path, controller.ledger().winners())
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
