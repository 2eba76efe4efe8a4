//! Run statistics.

use std::fmt;

/// Counters for one cycle, produced by the apply phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// Packets created this cycle.
    pub injected:      u64,
    /// Injection draws that landed on the source node.
    pub self_draws:    u64,
    /// Injections refused because the source queue was full.
    pub refused:       u64,
    /// Packets moved one hop without arriving.
    pub forwarded:     u64,
    /// Packets that reached their destination.
    pub delivered:     u64,
    /// Sum of `delivered_at - created_at` over this cycle's deliveries.
    pub total_latency: u64,
    /// Packets discarded by the `Drop` overflow policy.
    pub dropped:       u64,
    /// Packets held back by the `Stall` overflow policy.
    pub stalls:        u64,
    /// Packets queued anywhere in the mesh after the apply phase.
    pub in_flight:     u64,
}

/// Cumulative counters over the simulator's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub injected:                  u64,
    pub self_draws:                u64,
    pub refused:                   u64,
    pub total_packets_delivered:   u64,
    pub total_latency_accumulated: u64,
    pub dropped:                   u64,
    pub stalls:                    u64,
}

impl SimStats {
    /// Mean delivery latency in cycles, or `0.0` if nothing was delivered.
    pub fn average_latency(&self) -> f64 {
        if self.total_packets_delivered == 0 {
            0.0
        } else {
            self.total_latency_accumulated as f64 / self.total_packets_delivered as f64
        }
    }

    pub(crate) fn absorb(&mut self, cycle: &CycleSummary) {
        self.injected += cycle.injected;
        self.self_draws += cycle.self_draws;
        self.refused += cycle.refused;
        self.total_packets_delivered += cycle.delivered;
        self.total_latency_accumulated += cycle.total_latency;
        self.dropped += cycle.dropped;
        self.stalls += cycle.stalls;
    }
}

/// Result of [`Simulator::run`](crate::Simulator::run).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Cycles executed by this call.
    pub cycles:                  u64,
    /// Deliveries since the simulator was built.
    pub total_packets_delivered: u64,
    /// Mean latency since the simulator was built; `0.0` with no deliveries.
    pub average_latency:         f64,
    /// Packets still queued when the run ended.
    pub in_flight:               u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Packets Delivered: {}", self.total_packets_delivered)?;
        write!(f, "Average Latency: {:.2} cycles", self.average_latency)
    }
}
