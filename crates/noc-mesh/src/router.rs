//! Routing trait and the default dimension-order implementation.
//!
//! # Pluggability
//!
//! `noc-sim` calls routing via the [`Router`] trait, so applications can swap
//! in other deterministic or adaptive algorithms without touching the
//! simulator core.  The default [`DimensionOrderRouter`] moves along x until
//! the column matches, then along y.

use noc_core::{Coord, MeshShape};

use crate::{MeshError, MeshResult};

// ── RouteStep ─────────────────────────────────────────────────────────────────

/// One routing decision: the next hop and whether it is the destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouteStep {
    pub next:    Coord,
    pub arrived: bool,
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable per-hop routing function.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads during the parallel scan phase.
pub trait Router: Send + Sync {
    /// Choose the next hop for a packet at `current` bound for `destination`.
    ///
    /// Must move exactly one link.  Returns
    /// [`MeshError::AlreadyAtDestination`] if `current == destination` and a
    /// core `OutsideMesh` error if either coordinate is off the mesh.
    fn next_hop(
        &self,
        shape:       MeshShape,
        current:     Coord,
        destination: Coord,
    ) -> MeshResult<RouteStep>;

    /// Full hop sequence from `source` to `destination`, excluding `source`.
    ///
    /// A trivial route (`source == destination`) is empty.  Fails with
    /// [`MeshError::NoProgress`] if the router has not arrived after
    /// `node_count` hops, the length bound of any minimal mesh route.
    fn path(
        &self,
        shape:       MeshShape,
        source:      Coord,
        destination: Coord,
    ) -> MeshResult<Vec<Coord>> {
        shape.checked_index(source)?;
        let mut hops = Vec::new();
        let mut at = source;
        while at != destination {
            if hops.len() >= shape.node_count() {
                return Err(MeshError::NoProgress { from: source, to: destination });
            }
            let step = self.next_hop(shape, at, destination)?;
            hops.push(step.next);
            at = step.next;
        }
        Ok(hops)
    }
}

// ── DimensionOrderRouter ──────────────────────────────────────────────────────

/// Which axis a [`DimensionOrderRouter`] resolves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DimensionOrder {
    /// Correct x (column) first, then y.
    #[default]
    XFirst,
    /// Correct y (row) first, then x.
    YFirst,
}

/// Deterministic dimension-order routing.
///
/// Each call changes exactly one coordinate by exactly one unit, so a packet
/// reaches its destination in `manhattan(source, destination)` hops and its
/// distance to the destination shrinks by one every hop.
#[derive(Copy, Clone, Debug, Default)]
pub struct DimensionOrderRouter {
    order: DimensionOrder,
}

impl DimensionOrderRouter {
    /// X-then-Y routing (the default).
    pub fn xy() -> Self {
        Self { order: DimensionOrder::XFirst }
    }

    /// Y-then-X routing.
    pub fn yx() -> Self {
        Self { order: DimensionOrder::YFirst }
    }
}

impl Router for DimensionOrderRouter {
    fn next_hop(
        &self,
        shape:       MeshShape,
        current:     Coord,
        destination: Coord,
    ) -> MeshResult<RouteStep> {
        shape.checked_index(current)?;
        shape.checked_index(destination)?;
        if current == destination {
            return Err(MeshError::AlreadyAtDestination(current));
        }

        let mut next = current;
        let x_pending = current.x != destination.x;
        let y_pending = current.y != destination.y;
        let move_x = match self.order {
            DimensionOrder::XFirst => x_pending,
            DimensionOrder::YFirst => !y_pending,
        };
        if move_x {
            next.x = step_toward(current.x, destination.x);
        } else {
            next.y = step_toward(current.y, destination.y);
        }

        Ok(RouteStep { next, arrived: next == destination })
    }
}

/// One unit from `from` toward `to`; callers guarantee `from != to`.
#[inline]
fn step_toward(from: u32, to: u32) -> u32 {
    if from < to { from + 1 } else { from - 1 }
}
