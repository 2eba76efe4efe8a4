//! Plain data row types written by output backends.

use noc_core::Cycle;
use noc_mesh::{Node, Packet};
use noc_sim::CycleSummary;

/// One delivered packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRow {
    pub packet_id:    u64,
    pub source_x:     u32,
    pub source_y:     u32,
    pub dest_x:       u32,
    pub dest_y:       u32,
    pub created_at:   u64,
    pub delivered_at: u64,
    pub latency:      u64,
    pub hops:         u32,
}

impl DeliveryRow {
    /// `None` if the packet has not been delivered.
    pub fn from_packet(packet: &Packet) -> Option<Self> {
        let delivered_at = packet.delivered_at()?;
        Some(Self {
            packet_id:    packet.id().0,
            source_x:     packet.source().x,
            source_y:     packet.source().y,
            dest_x:       packet.destination().x,
            dest_y:       packet.destination().y,
            created_at:   packet.created_at().0,
            delivered_at: delivered_at.0,
            latency:      delivered_at.since(packet.created_at()),
            hops:         packet.hops(),
        })
    }
}

/// Counters for one simulation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummaryRow {
    pub cycle:      u64,
    pub injected:   u64,
    /// Injection draws that picked the source itself.
    pub self_draws: u64,
    /// Injections refused because the source queue was full.
    pub refused:    u64,
    pub delivered:  u64,
    pub forwarded:  u64,
    pub dropped:    u64,
    pub stalls:     u64,
    pub in_flight:  u64,
}

impl CycleSummaryRow {
    pub fn new(cycle: Cycle, summary: &CycleSummary) -> Self {
        Self {
            cycle:      cycle.0,
            injected:   summary.injected,
            self_draws: summary.self_draws,
            refused:    summary.refused,
            delivered:  summary.delivered,
            forwarded:  summary.forwarded,
            dropped:    summary.dropped,
            stalls:     summary.stalls,
            in_flight:  summary.in_flight,
        }
    }
}

/// Queue occupancy of one node at a snapshot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSnapshotRow {
    pub cycle:              u64,
    pub x:                  u32,
    pub y:                  u32,
    pub is_memory_endpoint: bool,
    pub queue_len:          u64,
    /// Packets delivered to this node so far.
    pub received:           u64,
}

impl QueueSnapshotRow {
    pub fn new(cycle: Cycle, node: &Node) -> Self {
        let c = node.coordinate();
        Self {
            cycle:              cycle.0,
            x:                  c.x,
            y:                  c.y,
            is_memory_endpoint: node.is_memory_endpoint(),
            queue_len:          node.queue_len() as u64,
            received:           node.received().len() as u64,
        }
    }
}
