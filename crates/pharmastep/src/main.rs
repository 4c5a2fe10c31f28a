use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pharmacy_core::io::inventory::Inventory;
use pharmacy_core::io::report::Report;
use pharmacy_core::item::Item;
use pharmacy_core::Pharmacy;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "pharmastep",
    about = "Batch runner for daily pharmacy benefit snapshots"
)]
struct Args {
    /// Path to an inventory JSON array. Defaults to the built-in starter stock.
    #[arg(long, value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// Number of days to simulate.
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Output JSON report path.
    #[arg(long, default_value = "output.json")]
    out: PathBuf,
}

fn load_items(args: &Args) -> Result<Vec<Item>> {
    match &args.inventory {
        Some(path) => {
            let inventory = Inventory::load_from_path(path)
                .with_context(|| format!("failed to read inventory {:?}", path))?;
            info!(path = %path.display(), items = inventory.items.len(), "loaded inventory");
            Ok(inventory.items)
        }
        None => {
            info!("using starter inventory");
            Ok(Inventory::starter().items)
        }
    }
}

fn run_simulation(pharmacy: &mut Pharmacy, days: u32) -> Result<Report> {
    let mut log = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let snapshot = pharmacy
            .advance_one_day()
            .with_context(|| format!("day {} failed", day))?
            .to_vec();
        debug!(day, items = snapshot.len(), "day complete");
        log.push(snapshot);
    }
    Ok(Report::new(log))
}

fn write_report(path: &Path, report: &Report) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);
    let json = report.to_pretty_json()?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut pharmacy = Pharmacy::new(load_items(args)?);
    let report = run_simulation(&mut pharmacy, args.days)?;
    write_report(&args.out, &report)?;
    info!(days = report.days(), out = %args.out.display(), "report written");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            println!("✓ Simulation completed successfully");
            println!("✓ Results written to {}", args.out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(?err, "simulation failed");
            eprintln!("✗ Error running simulation: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
