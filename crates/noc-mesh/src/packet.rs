//! The packet record.

use noc_core::{Coord, Cycle, PacketId};

use crate::{MeshError, MeshResult};

/// One routing request travelling through the mesh.
///
/// Everything except `delivered_at` and `hops` is fixed at construction.
/// The packet's current position is not stored here: it is the coordinate
/// of whichever [`Node`](crate::Node) queue currently owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packet {
    id:           PacketId,
    source:       Coord,
    destination:  Coord,
    created_at:   Cycle,
    delivered_at: Option<Cycle>,
    hops:         u32,
}

impl Packet {
    /// Create a packet.  Fails if `source == destination`.
    pub fn new(
        id:          PacketId,
        source:      Coord,
        destination: Coord,
        created_at:  Cycle,
    ) -> MeshResult<Self> {
        if source == destination {
            return Err(MeshError::SelfAddressed(source));
        }
        Ok(Self {
            id,
            source,
            destination,
            created_at,
            delivered_at: None,
            hops: 0,
        })
    }

    #[inline]
    pub fn id(&self) -> PacketId {
        self.id
    }

    #[inline]
    pub fn source(&self) -> Coord {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Coord {
        self.destination
    }

    #[inline]
    pub fn created_at(&self) -> Cycle {
        self.created_at
    }

    #[inline]
    pub fn delivered_at(&self) -> Option<Cycle> {
        self.delivered_at
    }

    /// Links traversed so far.
    #[inline]
    pub fn hops(&self) -> u32 {
        self.hops
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.delivered_at.is_some()
    }

    /// `delivered_at - created_at`, once delivered.
    pub fn latency(&self) -> Option<u64> {
        self.delivered_at.map(|d| d.since(self.created_at))
    }

    /// Count one link traversal.
    #[inline]
    pub fn record_hop(&mut self) {
        self.hops += 1;
    }

    /// Stamp the delivery cycle.  May succeed only once per packet.
    pub fn mark_delivered(&mut self, at: Cycle) -> MeshResult<()> {
        if self.delivered_at.is_some() {
            return Err(MeshError::AlreadyDelivered(self.id));
        }
        if at < self.created_at {
            return Err(MeshError::DeliveredBeforeCreation {
                id:        self.id,
                created:   self.created_at,
                delivered: at,
            });
        }
        self.delivered_at = Some(at);
        Ok(())
    }
}
