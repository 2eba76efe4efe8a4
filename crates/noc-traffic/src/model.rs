//! The `TrafficModel` trait — the injection extension point.

use noc_core::{Coord, Cycle, MeshShape, NodeRng};

/// Outcome of one node's injection attempt in one cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Injection {
    /// No injection this cycle.
    Idle,
    /// The destination draw landed on the source node.  No packet is
    /// created and the draw is not repeated.
    SelfDraw,
    /// Inject a packet bound for this coordinate.
    To(Coord),
}

/// Pluggable packet injection.
///
/// # Thread safety
///
/// With the `parallel` feature of `noc-sim`, `inject` is called for many
/// nodes at once, so implementations must be `Send + Sync`.  Per-node
/// randomness comes from the `rng` argument, never from state in the model.
///
/// # Example
///
/// ```rust,ignore
/// /// Every node sends to the mesh corner on even cycles.
/// struct Hotspot;
///
/// impl TrafficModel for Hotspot {
///     fn inject(&self, source: Coord, now: Cycle, shape: MeshShape, _rng: &mut NodeRng) -> Injection {
///         let corner = Coord::new(shape.size() - 1, shape.size() - 1);
///         match (now.0 % 2, source == corner) {
///             (0, false) => Injection::To(corner),
///             (0, true)  => Injection::SelfDraw,
///             _          => Injection::Idle,
///         }
///     }
/// }
/// ```
pub trait TrafficModel: Send + Sync + 'static {
    /// Decide whether the node at `source` injects a packet at `now`.
    ///
    /// Returned destinations must lie inside `shape`.
    fn inject(
        &self,
        source: Coord,
        now:    Cycle,
        shape:  MeshShape,
        rng:    &mut NodeRng,
    ) -> Injection;
}
