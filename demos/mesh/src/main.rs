//! mesh — run one NoC simulation under uniform random traffic.
//!
//! With no arguments this reproduces the reference experiment: an 8x8 mesh,
//! 200-cycle memory delay, 30% injection rate, 1000 cycles.
//!
//! ```text
//! mesh --grid-size 4 --cycles 5000 --queue-capacity 8 --overflow stall
//! mesh --config run.json --output-dir output/mesh
//! ```

mod common;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use noc_core::{OverflowPolicy, QueueLimit, SimConfig};
use noc_mesh::{DimensionOrderRouter, Router};
use noc_output::{CsvWriter, SimOutputObserver};
use noc_sim::{RunSummary, SimBuilder};
use noc_traffic::UniformTraffic;

use common::{load_config, setup_logger};

/// Command-line arguments.  Flags override values from `--config`.
#[derive(Parser)]
#[command(about = "Simulate uniform random traffic on a 2D mesh network-on-chip")]
struct Cli {
    /// Enable debug log messages
    #[arg(short, long)]
    debug: bool,

    /// JSON file holding a SimConfig
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cycles to simulate
    #[arg(long, default_value_t = 1_000)]
    cycles: u64,

    /// Mesh dimension (grid_size x grid_size nodes)
    #[arg(long)]
    grid_size: Option<u32>,

    /// Cycles added at delivery for backend memory access
    #[arg(long)]
    memory_delay: Option<u64>,

    /// Per-node, per-cycle injection probability
    #[arg(long)]
    injection_rate: Option<f64>,

    /// Master RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Bound every inbound queue to this many packets
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// What to do with packets forwarded into a full queue
    #[arg(long, value_enum, default_value = "drop")]
    overflow: OverflowArg,

    /// Write a queue snapshot every N cycles (requires --output-dir)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for deliveries.csv, cycle_summaries.csv, queue_snapshots.csv
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Route y before x
    #[arg(long)]
    yx: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OverflowArg {
    Drop,
    Stall,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Drop => OverflowPolicy::Drop,
            OverflowArg::Stall => OverflowPolicy::Stall,
        }
    }
}

impl Cli {
    fn apply_overrides(&self, config: &mut SimConfig) {
        if let Some(v) = self.grid_size {
            config.grid_size = v;
        }
        if let Some(v) = self.memory_delay {
            config.memory_delay = v;
        }
        if let Some(v) = self.injection_rate {
            config.injection_rate = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(capacity) = self.queue_capacity {
            config.queue_limit = Some(QueueLimit { capacity, policy: self.overflow.into() });
        }
        if let Some(v) = self.snapshot_interval {
            config.output_interval_cycles = v;
        }
    }
}

fn run<R: Router>(config: SimConfig, router: R, cycles: u64, output_dir: Option<&Path>) -> Result<RunSummary> {
    config.validate()?;
    let traffic = UniformTraffic::new(config.injection_rate)?;
    let mut sim = SimBuilder::new(config, traffic, router).build()?;

    let Some(dir) = output_dir else {
        return Ok(sim.run(cycles)?);
    };

    std::fs::create_dir_all(dir)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?);
    let summary = sim.run_with(cycles, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e.into());
    }
    info!("wrote CSV output to {}", dir.display());
    Ok(summary)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logger(args.debug);

    let mut config = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    println!("=== mesh — NoC simulator ===");
    println!(
        "Mesh: {0}x{0}  |  Memory delay: {1}  |  Injection rate: {2}  |  Seed: {3}",
        config.grid_size, config.memory_delay, config.injection_rate, config.seed,
    );
    println!();

    let router = if args.yx { DimensionOrderRouter::yx() } else { DimensionOrderRouter::xy() };
    let t0 = Instant::now();
    let summary = run(config, router, args.cycles, args.output_dir.as_deref())?;
    let elapsed = t0.elapsed();

    println!("{summary}");
    println!("Packets still in flight: {}", summary.in_flight);
    println!("Simulated {} cycles in {:.3} s", summary.cycles, elapsed.as_secs_f64());

    Ok(())
}
