//! A mesh vertex.

use std::collections::VecDeque;

use noc_core::Coord;

use crate::Packet;

/// One mesh node: a FIFO of packets waiting to be forwarded and a log of
/// packets delivered here.
///
/// The node owns both collections exclusively.  Packets leave the inbound
/// queue only through [`take_queue`](Self::take_queue), which the simulator
/// calls once per cycle.
#[derive(Debug)]
pub struct Node {
    coordinate:         Coord,
    is_memory_endpoint: bool,
    inbound:            VecDeque<Packet>,
    received:           Vec<Packet>,
}

impl Node {
    pub fn new(coordinate: Coord, is_memory_endpoint: bool) -> Self {
        Self {
            coordinate,
            is_memory_endpoint,
            inbound:  VecDeque::new(),
            received: Vec::new(),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coord {
        self.coordinate
    }

    /// Informational flag; it does not influence routing or delivery delay.
    #[inline]
    pub fn is_memory_endpoint(&self) -> bool {
        self.is_memory_endpoint
    }

    /// Append a packet to the back of the inbound queue.
    #[inline]
    pub fn enqueue(&mut self, packet: Packet) {
        self.inbound.push_back(packet);
    }

    /// Move the whole inbound queue out, leaving it empty.
    ///
    /// The returned snapshot is what the node forwards this cycle; anything
    /// enqueued afterwards waits for the next one.
    #[inline]
    pub fn take_queue(&mut self) -> VecDeque<Packet> {
        std::mem::take(&mut self.inbound)
    }

    #[inline]
    pub fn queue(&self) -> &VecDeque<Packet> {
        &self.inbound
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.inbound.len()
    }

    /// Append a delivered packet to the received log.
    #[inline]
    pub fn receive(&mut self, packet: Packet) {
        self.received.push(packet);
    }

    #[inline]
    pub fn received(&self) -> &[Packet] {
        &self.received
    }
}
