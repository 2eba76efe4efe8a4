//! A traffic model that never injects.

use noc_core::{Coord, Cycle, MeshShape, NodeRng};

use crate::{Injection, TrafficModel};

/// A [`TrafficModel`] that is always idle.
///
/// Useful in tests that seed queues by hand, or to drain an already loaded
/// mesh without new arrivals.
pub struct NoTraffic;

impl TrafficModel for NoTraffic {
    fn inject(
        &self,
        _source: Coord,
        _now:    Cycle,
        _shape:  MeshShape,
        _rng:    &mut NodeRng,
    ) -> Injection {
        Injection::Idle
    }
}
