//! Packet identifiers.

use std::fmt;

use crate::Cycle;

/// Unique identifier of a packet within one simulation run.
///
/// Ids are derived from the injection point rather than a running counter:
///
///   id = cycle * node_count + source_index
///
/// Each node injects at most one packet per cycle, so the id is unique, and
/// because it does not depend on scan order it stays stable when the scan
/// phase runs in parallel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacketId(pub u64);

impl PacketId {
    /// Id of the packet injected by node `source_index` at `cycle`.
    #[inline]
    pub fn for_injection(cycle: Cycle, source_index: usize, node_count: usize) -> Self {
        PacketId(cycle.0 * node_count as u64 + source_index as u64)
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PacketId({})", self.0)
    }
}
