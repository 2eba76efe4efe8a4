//! The node arena.
//!
//! # Layout
//!
//! Nodes live in one `Vec<Node>` in row-major order, so a coordinate maps to
//! a node with a single multiply-add ([`MeshShape::index_of`]).  The arena is
//! sized once at construction and never grows.

use noc_core::{Coord, MeshShape, NocResult, SimRng};

use crate::Node;

/// A fixed `size × size` collection of [`Node`]s addressable by coordinate.
#[derive(Debug)]
pub struct Grid {
    shape: MeshShape,
    nodes: Vec<Node>,
}

impl Grid {
    /// Build a grid, asking `is_memory_endpoint` once per coordinate in
    /// row-major order.
    pub fn new(shape: MeshShape, mut is_memory_endpoint: impl FnMut(Coord) -> bool) -> Self {
        let nodes = shape
            .coords()
            .map(|c| Node::new(c, is_memory_endpoint(c)))
            .collect();
        Self { shape, nodes }
    }

    /// Build a grid, flagging each node as a memory endpoint with
    /// probability `memory_endpoint_fraction` (one draw per node from `rng`).
    pub fn random(shape: MeshShape, memory_endpoint_fraction: f64, rng: &mut SimRng) -> Self {
        Self::new(shape, |_| rng.gen_bool(memory_endpoint_fraction))
    }

    #[inline]
    pub fn shape(&self) -> MeshShape {
        self.shape
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, coord: Coord) -> Option<&Node> {
        self.shape.index_of(coord).map(|i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, coord: Coord) -> Option<&mut Node> {
        self.shape.index_of(coord).map(move |i| &mut self.nodes[i])
    }

    /// Like [`node_mut`](Self::node_mut) but reports an out-of-mesh
    /// coordinate as an error.
    pub fn checked_node_mut(&mut self, coord: Coord) -> NocResult<&mut Node> {
        let i = self.shape.checked_index(coord)?;
        Ok(&mut self.nodes[i])
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable row-major slice, for the simulator's scan phase.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Packets currently waiting in any inbound queue.
    pub fn in_flight(&self) -> usize {
        self.nodes.iter().map(Node::queue_len).sum()
    }

    /// Packets delivered to any node so far.
    pub fn delivered(&self) -> usize {
        self.nodes.iter().map(|n| n.received().len()).sum()
    }

    /// Number of nodes flagged as memory endpoints.
    pub fn memory_endpoints(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_memory_endpoint()).count()
    }
}
