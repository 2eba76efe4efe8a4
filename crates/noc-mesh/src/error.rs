//! Mesh-subsystem error type.

use thiserror::Error;

use noc_core::{Coord, Cycle, NocError, PacketId};

/// Errors produced by `noc-mesh`.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("packet source and destination are both {0}")]
    SelfAddressed(Coord),

    #[error("{0} was already delivered")]
    AlreadyDelivered(PacketId),

    #[error("{id} created at {created} cannot be delivered at {delivered}")]
    DeliveredBeforeCreation {
        id:        PacketId,
        created:   Cycle,
        delivered: Cycle,
    },

    #[error("routing invoked at destination {0}")]
    AlreadyAtDestination(Coord),

    #[error("router made no progress from {from} to {to}")]
    NoProgress { from: Coord, to: Coord },

    #[error(transparent)]
    Core(#[from] NocError),
}

pub type MeshResult<T> = Result<T, MeshError>;
