//! sweep — average latency across a range of injection rates.
//!
//! Each rate gets a fresh simulator with the same seed, so rows differ only
//! in offered load.

mod common;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use noc_sim::Simulator;

use common::{load_config, setup_logger};

/// Command-line arguments.
#[derive(Parser)]
#[command(about = "Sweep injection rates on a 2D mesh network-on-chip")]
struct Cli {
    /// Enable debug log messages
    #[arg(short, long)]
    debug: bool,

    /// JSON file holding the base SimConfig
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cycles per rate
    #[arg(long, default_value_t = 1_000)]
    cycles: u64,

    /// Comma-separated injection rates
    #[arg(long, value_delimiter = ',', default_values_t = [0.05, 0.1, 0.2, 0.3, 0.5, 0.8, 1.0])]
    rates: Vec<f64>,

    /// Also write the table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logger(args.debug);
    let base = load_config(args.config.as_deref())?;

    let mut table = match &args.csv {
        Some(path) => {
            let mut w = csv::Writer::from_path(path)?;
            w.write_record(["injection_rate", "injected", "delivered", "average_latency", "in_flight"])?;
            Some(w)
        }
        None => None,
    };

    println!("{:<8} {:>10} {:>10} {:>12} {:>10}", "Rate", "Injected", "Delivered", "Latency", "InFlight");
    println!("{}", "-".repeat(54));
    for &rate in &args.rates {
        let mut config = base.clone();
        config.injection_rate = rate;
        let mut sim = Simulator::from_config(config)?;
        let summary = sim.run(args.cycles)?;
        let injected = sim.stats().injected;

        println!(
            "{:<8.3} {:>10} {:>10} {:>12.2} {:>10}",
            rate, injected, summary.total_packets_delivered, summary.average_latency, summary.in_flight,
        );
        if let Some(w) = table.as_mut() {
            w.write_record(&[
                rate.to_string(),
                injected.to_string(),
                summary.total_packets_delivered.to_string(),
                format!("{:.4}", summary.average_latency),
                summary.in_flight.to_string(),
            ])?;
        }
    }
    if let Some(mut w) = table {
        w.flush()?;
    }

    Ok(())
}
