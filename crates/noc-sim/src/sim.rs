//! The `Simulator` struct and its cycle loop.

use log::{debug, info, trace, warn};

use noc_core::{Coord, Cycle, MeshShape, NodeRng, OverflowPolicy, PacketId, QueueLimit, SimConfig};
use noc_mesh::{DimensionOrderRouter, Grid, Node, Packet, Router};
use noc_traffic::{Injection, TrafficModel, UniformTraffic};

use crate::{CycleSummary, NoopObserver, RunSummary, SimBuilder, SimObserver, SimResult, SimStats};

// ── Staged transfers ──────────────────────────────────────────────────────────

/// A cross-node write decided during the scan phase and applied afterwards.
enum Transfer {
    /// The hop lands on the packet's destination.
    Deliver(Packet),
    /// The packet moves from `from` to the inbound queue at `to`.
    Forward { packet: Packet, from: Coord, to: Coord },
}

/// Everything one node produced during the scan phase.
#[derive(Default)]
struct NodeStep {
    injected:  bool,
    self_draw: bool,
    refused:   bool,
    transfers: Vec<Transfer>,
}

/// Read-only inputs shared by every node step in one cycle.
///
/// Holding only shared borrows keeps the scan phase free of cross-node
/// writes, which is what allows it to run in parallel.
struct ScanContext<'a, T, R> {
    now:      Cycle,
    shape:    MeshShape,
    capacity: Option<usize>,
    traffic:  &'a T,
    router:   &'a R,
}

impl<T: TrafficModel, R: Router> ScanContext<'_, T, R> {
    /// Inject at `node`, then drain its queue snapshot into staged transfers.
    fn step(&self, index: usize, node: &mut Node, rng: &mut NodeRng) -> SimResult<NodeStep> {
        let source = node.coordinate();
        let mut step = NodeStep::default();

        match self.traffic.inject(source, self.now, self.shape, rng) {
            Injection::Idle => {}
            Injection::SelfDraw => step.self_draw = true,
            Injection::To(destination) => {
                self.shape.checked_index(destination)?;
                if self.capacity.is_some_and(|cap| node.queue_len() >= cap) {
                    step.refused = true;
                } else {
                    let id = PacketId::for_injection(self.now, index, self.shape.node_count());
                    node.enqueue(Packet::new(id, source, destination, self.now)?);
                    step.injected = true;
                }
            }
        }

        let queue = node.take_queue();
        step.transfers.reserve(queue.len());
        for packet in queue {
            let hop = self.router.next_hop(self.shape, source, packet.destination())?;
            step.transfers.push(if hop.arrived {
                Transfer::Deliver(packet)
            } else {
                Transfer::Forward { packet, from: source, to: hop.next }
            });
        }
        Ok(step)
    }
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Simulator<T, R>` owns all simulation state and drives the two-phase cycle
/// loop:
///
/// 1. **Scan** (optionally parallel with the `parallel` feature): each node
///    consults the [`TrafficModel`], enqueues any new packet, then takes its
///    whole inbound queue and routes every packet one hop with the
///    [`Router`].  Decisions are staged, not applied.
/// 2. **Apply** (sequential, row-major node order for determinism):
///    - `Deliver` → `delivered_at = cycle + 1 + memory_delay`; the packet is
///      appended to the destination's received log.
///    - `Forward` → appended to the next hop's inbound queue, subject to the
///      optional [`QueueLimit`].  Which forwards find their next hop full
///      is settled before any of them is applied.
///
/// Crossing a link takes one cycle, so without stalls a packet's latency is
/// its Manhattan distance plus `memory_delay`.
///
/// Create via [`SimBuilder`] or the convenience constructors
/// [`Simulator::new`] / [`Simulator::from_config`].
pub struct Simulator<T: TrafficModel = UniformTraffic, R: Router = DimensionOrderRouter> {
    pub(crate) config:          SimConfig,
    pub(crate) cycle:           Cycle,
    pub(crate) grid:            Grid,
    /// Per-node RNGs, parallel to `grid.nodes()`.
    pub(crate) rngs:            Vec<NodeRng>,
    pub(crate) traffic:         T,
    pub(crate) router:          R,
    pub(crate) stats:           SimStats,
    pub(crate) overflow_warned: bool,
}

impl Simulator<UniformTraffic, DimensionOrderRouter> {
    /// Uniform random traffic at the default injection rate on a
    /// `grid_size × grid_size` mesh with X-then-Y routing.
    pub fn new(grid_size: u32, memory_delay: u64) -> SimResult<Self> {
        Self::from_config(SimConfig::new(grid_size, memory_delay))
    }

    /// Uniform random traffic at `config.injection_rate` with X-then-Y
    /// routing.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let traffic = UniformTraffic::new(config.injection_rate)?;
        SimBuilder::new(config, traffic, DimensionOrderRouter::xy()).build()
    }
}

impl<T: TrafficModel, R: Router> Simulator<T, R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `cycles` cycles from the current cycle and report the cumulative
    /// totals.
    pub fn run(&mut self, cycles: u64) -> SimResult<RunSummary> {
        self.run_with(cycles, &mut NoopObserver)
    }

    /// Like [`run`](Self::run), calling observer hooks at every cycle
    /// boundary.
    pub fn run_with<O: SimObserver>(&mut self, cycles: u64, observer: &mut O) -> SimResult<RunSummary> {
        debug!("running {cycles} cycles on {} from {}", self.grid.shape(), self.cycle);

        for _ in 0..cycles {
            let now = self.cycle;
            observer.on_cycle_start(now);
            let summary = self.process_cycle(now, observer)?;
            observer.on_cycle_end(now, &summary);
            if now.is_multiple_of(self.config.output_interval_cycles) {
                observer.on_snapshot(now, &self.grid);
            }
            self.cycle.advance();
        }
        observer.on_sim_end(self.cycle, &self.stats);

        let summary = RunSummary {
            cycles,
            total_packets_delivered: self.stats.total_packets_delivered,
            average_latency:         self.stats.average_latency(),
            in_flight:               self.grid.in_flight() as u64,
        };
        info!(
            "{}: {} packets delivered, average latency {:.2} cycles, {} in flight",
            self.cycle, summary.total_packets_delivered, summary.average_latency, summary.in_flight,
        );
        Ok(summary)
    }

    /// The next cycle to be simulated.
    #[inline]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    #[inline]
    pub fn traffic(&self) -> &T {
        &self.traffic
    }

    #[inline]
    pub fn router(&self) -> &R {
        &self.router
    }

    // ── Core cycle processing ─────────────────────────────────────────────

    fn process_cycle<O: SimObserver>(&mut self, now: Cycle, observer: &mut O) -> SimResult<CycleSummary> {
        // ── Phase 1: scan ─────────────────────────────────────────────────
        let steps = self.scan(now)?;

        // ── Phase 2: apply staged transfers in scan order ─────────────────
        let mut blocked = match self.config.queue_limit {
            Some(limit) => blocked_forwards(&steps, self.grid.shape(), limit)?,
            None => Vec::new(),
        }
        .into_iter();
        let mut summary = CycleSummary::default();
        for step in steps {
            summary.injected += u64::from(step.injected);
            summary.self_draws += u64::from(step.self_draw);
            summary.refused += u64::from(step.refused);
            for transfer in step.transfers {
                self.apply(now, transfer, &mut blocked, &mut summary, observer)?;
            }
        }
        summary.in_flight = self.grid.in_flight() as u64;
        self.stats.absorb(&summary);

        debug!(
            "{now}: injected {} delivered {} forwarded {} in flight {}",
            summary.injected, summary.delivered, summary.forwarded, summary.in_flight,
        );
        Ok(summary)
    }

    /// Run every node's step and collect the results in row-major order.
    fn scan(&mut self, now: Cycle) -> SimResult<Vec<NodeStep>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = ScanContext {
            now,
            shape:    self.grid.shape(),
            capacity: self.config.queue_limit.map(|l| l.capacity),
            traffic:  &self.traffic,
            router:   &self.router,
        };
        let nodes = self.grid.nodes_mut();
        let rngs = self.rngs.as_mut_slice();

        #[cfg(not(feature = "parallel"))]
        {
            nodes
                .iter_mut()
                .zip(rngs.iter_mut())
                .enumerate()
                .map(|(i, (node, rng))| ctx.step(i, node, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            nodes
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .enumerate()
                .map(|(i, (node, rng))| ctx.step(i, node, rng))
                .collect()
        }
    }

    /// Apply one staged transfer during the sequential write phase.
    ///
    /// `blocked` yields one flag per `Forward`, in scan order, from
    /// [`blocked_forwards`].  It is empty when queues are unbounded.
    fn apply<O: SimObserver>(
        &mut self,
        now:      Cycle,
        transfer: Transfer,
        blocked:  &mut impl Iterator<Item = bool>,
        summary:  &mut CycleSummary,
        observer: &mut O,
    ) -> SimResult<()> {
        match transfer {
            // ── Deliver: the final link completes at the end of `now` ──────
            Transfer::Deliver(mut packet) => {
                packet.record_hop();
                let delivered_at = now + 1 + self.config.memory_delay;
                packet.mark_delivered(delivered_at)?;
                summary.delivered += 1;
                summary.total_latency += delivered_at.since(packet.created_at());
                trace!(
                    "{} delivered {} -> {} at {delivered_at} after {} hops",
                    packet.id(), packet.source(), packet.destination(), packet.hops(),
                );
                observer.on_delivery(now, &packet);
                self.grid.checked_node_mut(packet.destination())?.receive(packet);
            }

            // ── Forward: enqueue at the next hop, unless it is full ────────
            Transfer::Forward { mut packet, from, to } => {
                let full = blocked.next().unwrap_or(false);
                match self.config.queue_limit {
                    Some(l) if full => self.overflow(now, l, packet, from, summary, observer)?,
                    _ => {
                        packet.record_hop();
                        self.grid.checked_node_mut(to)?.enqueue(packet);
                        summary.forwarded += 1;
                    }
                }
            }
        }
        Ok(())
    }

    /// Handle a forward into a full queue according to the overflow policy.
    fn overflow<O: SimObserver>(
        &mut self,
        now:      Cycle,
        limit:    QueueLimit,
        packet:   Packet,
        from:     Coord,
        summary:  &mut CycleSummary,
        observer: &mut O,
    ) -> SimResult<()> {
        if !self.overflow_warned {
            warn!(
                "{now}: inbound queue capacity {} reached, applying {:?} policy",
                limit.capacity, limit.policy,
            );
            self.overflow_warned = true;
        }
        match limit.policy {
            OverflowPolicy::Drop => {
                summary.dropped += 1;
                trace!("{} dropped at {from}", packet.id());
                observer.on_drop(now, &packet, from);
            }
            OverflowPolicy::Stall => {
                summary.stalls += 1;
                self.grid.checked_node_mut(from)?.enqueue(packet);
            }
        }
        Ok(())
    }
}

// ── Capacity resolution ───────────────────────────────────────────────────────

/// Decide, for every staged `Forward` in scan order, whether its next hop is
/// full.
///
/// After the scan every queue is empty, so a node's occupancy at the end of
/// the cycle is its accepted arrivals plus, under [`OverflowPolicy::Stall`],
/// the packets that could not leave it.  Arrivals are accepted first come
/// first served in scan order.  A stall takes room at its source, which can
/// in turn block an arrival there, so the flags are recomputed until no new
/// forward is blocked.  Flags only ever go from open to blocked, so this ends
/// after at most one round per forward.
///
/// Every queue then holds at most `limit.capacity` packets: a stall only
/// returns a packet to the queue it came from, whose snapshot fitted.
fn blocked_forwards(steps: &[NodeStep], shape: MeshShape, limit: QueueLimit) -> SimResult<Vec<bool>> {
    let mut forwards = Vec::new();
    for transfer in steps.iter().flat_map(|s| &s.transfers) {
        if let Transfer::Forward { from, to, .. } = transfer {
            forwards.push((shape.checked_index(*from)?, shape.checked_index(*to)?));
        }
    }

    let mut blocked = vec![false; forwards.len()];
    let mut kept = vec![0usize; shape.node_count()];
    loop {
        let mut room: Vec<usize> = kept.iter().map(|&k| limit.capacity.saturating_sub(k)).collect();
        let mut changed = false;
        for (flag, &(from, to)) in blocked.iter_mut().zip(&forwards) {
            if *flag {
                continue;
            }
            if room[to] > 0 {
                room[to] -= 1;
            } else {
                *flag = true;
                changed = true;
                if limit.policy == OverflowPolicy::Stall {
                    kept[from] += 1;
                }
            }
        }
        if !changed {
            return Ok(blocked);
        }
    }
}
