//! `noc-output` — simulation output writers for the NoC mesh simulator.
//!
//! | Backend | Files created                                                     |
//! |---------|-------------------------------------------------------------------|
//! | CSV     | `deliveries.csv`, `cycle_summaries.csv`, `queue_snapshots.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `noc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use noc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_with(1_000, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CycleSummaryRow, DeliveryRow, QueueSnapshotRow};
pub use writer::OutputWriter;
