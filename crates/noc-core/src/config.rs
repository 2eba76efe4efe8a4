//! Run configuration.

use crate::{MeshShape, NocError, NocResult};

// ── Queue bounding ────────────────────────────────────────────────────────────

/// What happens to a packet forwarded into a full inbound queue.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowPolicy {
    /// The packet is discarded and counted as dropped.
    #[default]
    Drop,
    /// The packet stays queued at its current node and retries next cycle.
    /// It keeps its slot there, so arrivals at that node are refused first.
    Stall,
}

/// Optional bound on every node's inbound queue.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueLimit {
    /// Maximum packets a queue may hold before new arrivals overflow.
    pub capacity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy:   OverflowPolicy,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from defaults plus command-line overrides, or loaded from
/// a JSON file by the application crate (enable the `serde` feature), and
/// passed to the simulation builder.  Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Mesh dimension; the grid holds `grid_size²` nodes.  Default: 4.
    pub grid_size: u32,

    /// Cycles added at delivery to emulate backend memory access.
    /// Default: 200.
    pub memory_delay: u64,

    /// Probability that a node attempts an injection in a given cycle.
    /// Default: 0.3.
    pub injection_rate: f64,

    /// Probability that a node is flagged as a memory endpoint at
    /// construction.  Default: 0.2.
    pub memory_endpoint_fraction: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Bound on inbound queues.  `None` (the default) means unbounded.
    pub queue_limit: Option<QueueLimit>,

    /// Report a queue snapshot every N cycles.  0 disables snapshots.
    pub output_interval_cycles: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size:                4,
            memory_delay:             200,
            injection_rate:           0.3,
            memory_endpoint_fraction: 0.2,
            seed:                     0,
            queue_limit:              None,
            output_interval_cycles:   0,
        }
    }
}

impl SimConfig {
    /// Default configuration for a `grid_size` mesh with the given delay.
    pub fn new(grid_size: u32, memory_delay: u64) -> Self {
        Self { grid_size, memory_delay, ..Self::default() }
    }

    /// Check every field, failing on the first invalid one.
    ///
    /// Values are never clamped: a probability of 1.5 is an error, not 1.0.
    pub fn validate(&self) -> NocResult<()> {
        MeshShape::new(self.grid_size)?;
        check_probability("injection_rate", self.injection_rate)?;
        check_probability("memory_endpoint_fraction", self.memory_endpoint_fraction)?;
        if let Some(limit) = self.queue_limit {
            if limit.capacity == 0 {
                return Err(NocError::Config("queue_limit.capacity must be at least 1".into()));
            }
        }
        Ok(())
    }

    /// The validated mesh shape for this configuration.
    pub fn shape(&self) -> NocResult<MeshShape> {
        MeshShape::new(self.grid_size)
    }
}

fn check_probability(name: &str, p: f64) -> NocResult<()> {
    // `contains` is false for NaN.
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(NocError::Config(format!("{name} must be within [0, 1], got {p}")))
    }
}
