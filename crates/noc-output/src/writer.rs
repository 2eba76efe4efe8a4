//! The `OutputWriter` trait implemented by backend writers.

use crate::{CycleSummaryRow, DeliveryRow, OutputResult, QueueSnapshotRow};

/// Trait implemented by output backends.
///
/// When driven by [`SimOutputObserver`](crate::SimOutputObserver), the first
/// error is stored and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of delivered packets.
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()>;

    /// Write one cycle summary row.
    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()>;

    /// Write a batch of per-node queue snapshots.
    fn write_snapshots(&mut self, rows: &[QueueSnapshotRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Safe to call more than once; writing may continue afterwards.
    fn finish(&mut self) -> OutputResult<()>;
}
