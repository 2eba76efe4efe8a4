//! Simulation observer trait for progress reporting and data collection.

use noc_core::{Coord, Cycle};
use noc_mesh::{Grid, Packet};

use crate::{CycleSummary, SimStats};

/// Callbacks invoked by [`Simulator::run_with`][crate::Simulator::run_with]
/// at key points in the cycle loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_cycle_end(&mut self, cycle: Cycle, summary: &CycleSummary) {
///         if cycle.0 % self.interval == 0 {
///             println!("{cycle}: {} delivered, {} in flight", summary.delivered, summary.in_flight);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each cycle, before any processing.
    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// Called once per delivered packet during the apply phase, after
    /// `delivered_at` has been stamped.
    fn on_delivery(&mut self, _cycle: Cycle, _packet: &Packet) {}

    /// Called when the `Drop` overflow policy discards `packet`, which was
    /// queued at `at`.
    fn on_drop(&mut self, _cycle: Cycle, _packet: &Packet, _at: Coord) {}

    /// Called at the end of each cycle with that cycle's counters.
    fn on_cycle_end(&mut self, _cycle: Cycle, _summary: &CycleSummary) {}

    /// Called every `config.output_interval_cycles` cycles with read-only
    /// access to the whole grid, so writers can record queue occupancy.
    fn on_snapshot(&mut self, _cycle: Cycle, _grid: &Grid) {}

    /// Called once at the end of each `run` call.
    fn on_sim_end(&mut self, _final_cycle: Cycle, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run_with`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
