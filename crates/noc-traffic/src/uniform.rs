//! Uniform random traffic.

use noc_core::{Coord, Cycle, MeshShape, NodeRng};

use crate::{Injection, TrafficError, TrafficModel, TrafficResult};

/// Each node injects with probability `injection_rate` per cycle; the
/// destination is drawn uniformly from every node in the mesh.
///
/// The draw includes the source itself.  Such a draw yields
/// [`Injection::SelfDraw`] and is not repeated, so the effective injection
/// rate is `injection_rate * (1 - 1 / node_count)`.
#[derive(Clone, Debug)]
pub struct UniformTraffic {
    injection_rate: f64,
}

impl UniformTraffic {
    /// Fails if `injection_rate` is outside [0, 1] or NaN.
    pub fn new(injection_rate: f64) -> TrafficResult<Self> {
        if !(0.0..=1.0).contains(&injection_rate) {
            return Err(TrafficError::Config(format!(
                "injection_rate must be within [0, 1], got {injection_rate}"
            )));
        }
        Ok(Self { injection_rate })
    }

    #[inline]
    pub fn injection_rate(&self) -> f64 {
        self.injection_rate
    }
}

impl TrafficModel for UniformTraffic {
    fn inject(
        &self,
        source: Coord,
        _now:   Cycle,
        shape:  MeshShape,
        rng:    &mut NodeRng,
    ) -> Injection {
        if !rng.gen_bool(self.injection_rate) {
            return Injection::Idle;
        }
        let size = shape.size();
        let dest = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if dest == source {
            Injection::SelfDraw
        } else {
            Injection::To(dest)
        }
    }
}
