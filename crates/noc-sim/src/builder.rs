//! Fluent builder for constructing a [`Simulator`].

use log::debug;

use noc_core::{Coord, Cycle, NodeRng, SimConfig, SimRng};
use noc_mesh::{Grid, Router};
use noc_traffic::TrafficModel;

use crate::{SimResult, SimStats, Simulator};

/// Salt separating the grid-construction RNG stream from node 0's stream,
/// which is seeded with the bare global seed.
const GRID_SEED_SALT: u64 = 0x6a09_e667_f3bc_c908;

/// Fluent builder for [`Simulator<T, R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — mesh size, memory delay, seed, queue limit, …
/// - `T: TrafficModel` — the injection pattern (e.g. [`noc_traffic::UniformTraffic`])
/// - `R: Router` — the routing algorithm (e.g. [`noc_mesh::DimensionOrderRouter`])
///
/// `config.injection_rate` is only read by the convenience constructors on
/// [`Simulator`]; a custom traffic model carries its own rate.
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                            |
/// |--------------------------|----------------------------------------------------|
/// | `.memory_endpoints(v)`   | Random, `config.memory_endpoint_fraction` per node |
///
/// # Example
///
/// ```rust,ignore
/// let traffic = UniformTraffic::new(0.1)?;
/// let mut sim = SimBuilder::new(config, traffic, DimensionOrderRouter::xy())
///     .memory_endpoints(vec![Coord::new(0, 0), Coord::new(7, 7)])
///     .build()?;
/// sim.run(1_000)?;
/// ```
pub struct SimBuilder<T: TrafficModel, R: Router> {
    config:           SimConfig,
    traffic:          T,
    router:           R,
    memory_endpoints: Option<Vec<Coord>>,
}

impl<T: TrafficModel, R: Router> SimBuilder<T, R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, traffic: T, router: R) -> Self {
        Self {
            config,
            traffic,
            router,
            memory_endpoints: None,
        }
    }

    /// Flag exactly these nodes as memory endpoints instead of drawing the
    /// flags at random.  Every coordinate must lie inside the mesh.
    pub fn memory_endpoints(mut self, coords: Vec<Coord>) -> Self {
        self.memory_endpoints = Some(coords);
        self
    }

    /// Validate the configuration, build the grid and per-node RNGs, and
    /// return a ready-to-run [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<T, R>> {
        self.config.validate()?;
        let shape = self.config.shape()?;

        // ── Node arena ────────────────────────────────────────────────────
        let grid = match self.memory_endpoints {
            Some(coords) => {
                let mut flags = vec![false; shape.node_count()];
                for c in coords {
                    flags[shape.checked_index(c)?] = true;
                }
                Grid::new(shape, |c| shape.index_of(c).is_some_and(|i| flags[i]))
            }
            None => {
                let mut rng = SimRng::new(self.config.seed ^ GRID_SEED_SALT);
                Grid::random(shape, self.config.memory_endpoint_fraction, &mut rng)
            }
        };

        // ── Per-node RNGs, parallel to the arena ──────────────────────────
        let rngs = (0..shape.node_count())
            .map(|i| NodeRng::new(self.config.seed, i))
            .collect();

        debug!(
            "built {shape}: {} memory endpoints, memory delay {}, seed {}",
            grid.memory_endpoints(),
            self.config.memory_delay,
            self.config.seed,
        );

        Ok(Simulator {
            config:          self.config,
            cycle:           Cycle::ZERO,
            grid,
            rngs,
            traffic:         self.traffic,
            router:          self.router,
            stats:           SimStats::default(),
            overflow_warned: false,
        })
    }
}
