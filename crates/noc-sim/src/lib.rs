//! `noc-sim` — cycle loop orchestrator for the NoC mesh simulator.
//!
//! # Two-phase cycle loop
//!
//! ```text
//! for cycle in 0..cycles:
//!   ① Scan   — for every node in row-major order (parallel with the
//!              `parallel` feature):
//!                inject   — ask the TrafficModel; enqueue the new packet
//!                drain    — take the whole inbound queue and route each
//!                           packet one hop, staging a Deliver or Forward
//!   ② Apply  — for each staged transfer in scan order:
//!                Deliver  → stamp delivered_at, append to received log
//!                Forward  → append to the next hop's inbound queue
//! ```
//!
//! No node queue is written by another node during the scan, so a packet
//! forwarded this cycle is never processed again until the next one.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the scan phase on Rayon's thread pool.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use noc_sim::Simulator;
//!
//! let mut sim = Simulator::new(8, 200)?;
//! let summary = sim.run(1_000)?;
//! println!("{summary}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
pub use stats::{CycleSummary, RunSummary, SimStats};
