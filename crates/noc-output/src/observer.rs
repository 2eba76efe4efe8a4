//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use noc_core::Cycle;
use noc_mesh::{Grid, Packet};
use noc_sim::{CycleSummary, SimObserver, SimStats};

use crate::row::{CycleSummaryRow, DeliveryRow, QueueSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes deliveries, cycle summaries and queue
/// snapshots to any [`OutputWriter`] backend.
///
/// Deliveries are buffered for the current cycle and written as one batch
/// when the cycle ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_with()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<DeliveryRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_delivery(&mut self, _cycle: Cycle, packet: &Packet) {
        if let Some(row) = DeliveryRow::from_packet(packet) {
            self.pending.push(row);
        }
    }

    fn on_cycle_end(&mut self, cycle: Cycle, summary: &CycleSummary) {
        if !self.pending.is_empty() {
            let result = self.writer.write_deliveries(&self.pending);
            self.pending.clear();
            self.store_err(result);
        }
        let result = self.writer.write_cycle_summary(&CycleSummaryRow::new(cycle, summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, cycle: Cycle, grid: &Grid) {
        let rows: Vec<QueueSnapshotRow> = grid
            .nodes()
            .iter()
            .map(|n| QueueSnapshotRow::new(cycle, n))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_cycle: Cycle, _stats: &SimStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
