//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `deliveries.csv`
//! - `cycle_summaries.csv`
//! - `queue_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CycleSummaryRow, DeliveryRow, OutputResult, QueueSnapshotRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    deliveries: Writer<File>,
    summaries:  Writer<File>,
    snapshots:  Writer<File>,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record([
            "packet_id", "source_x", "source_y", "dest_x", "dest_y",
            "created_at", "delivered_at", "latency", "hops",
        ])?;

        let mut summaries = Writer::from_path(dir.join("cycle_summaries.csv"))?;
        summaries.write_record([
            "cycle", "injected", "self_draws", "refused", "delivered",
            "forwarded", "dropped", "stalls", "in_flight",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("queue_snapshots.csv"))?;
        snapshots.write_record(["cycle", "x", "y", "is_memory_endpoint", "queue_len", "received"])?;

        Ok(Self { deliveries, summaries, snapshots })
    }
}

impl OutputWriter for CsvWriter {
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            self.deliveries.write_record(&[
                row.packet_id.to_string(),
                row.source_x.to_string(),
                row.source_y.to_string(),
                row.dest_x.to_string(),
                row.dest_y.to_string(),
                row.created_at.to_string(),
                row.delivered_at.to_string(),
                row.latency.to_string(),
                row.hops.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.cycle.to_string(),
            row.injected.to_string(),
            row.self_draws.to_string(),
            row.refused.to_string(),
            row.delivered.to_string(),
            row.forwarded.to_string(),
            row.dropped.to_string(),
            row.stalls.to_string(),
            row.in_flight.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[QueueSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.cycle.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.is_memory_endpoint as u8).to_string(),
                row.queue_len.to_string(),
                row.received.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.deliveries.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
