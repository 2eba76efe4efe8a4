//! Unit tests for noc-mesh.

#[cfg(test)]
mod packet_tests {
    use noc_core::{Coord, Cycle, PacketId};

    use crate::{MeshError, Packet};

    fn packet() -> Packet {
        Packet::new(PacketId(1), Coord::new(0, 0), Coord::new(2, 1), Cycle(5)).unwrap()
    }

    #[test]
    fn self_addressed_rejected() {
        let err = Packet::new(PacketId(0), Coord::new(1, 1), Coord::new(1, 1), Cycle(0));
        assert!(matches!(err, Err(MeshError::SelfAddressed(c)) if c == Coord::new(1, 1)));
    }

    #[test]
    fn fresh_packet_is_undelivered() {
        let p = packet();
        assert!(!p.is_delivered());
        assert_eq!(p.latency(), None);
        assert_eq!(p.hops(), 0);
    }

    #[test]
    fn delivery_sets_latency_once() {
        let mut p = packet();
        p.mark_delivered(Cycle(9)).unwrap();
        assert_eq!(p.delivered_at(), Some(Cycle(9)));
        assert_eq!(p.latency(), Some(4));
        assert!(matches!(p.mark_delivered(Cycle(10)), Err(MeshError::AlreadyDelivered(_))));
        assert_eq!(p.delivered_at(), Some(Cycle(9)));
    }

    #[test]
    fn delivery_before_creation_rejected() {
        let mut p = packet();
        assert!(matches!(
            p.mark_delivered(Cycle(4)),
            Err(MeshError::DeliveredBeforeCreation { .. })
        ));
        assert!(!p.is_delivered());
        // Same-cycle delivery is allowed (latency 0).
        p.mark_delivered(Cycle(5)).unwrap();
        assert_eq!(p.latency(), Some(0));
    }

    #[test]
    fn hops_accumulate() {
        let mut p = packet();
        p.record_hop();
        p.record_hop();
        assert_eq!(p.hops(), 2);
    }
}

#[cfg(test)]
mod node_tests {
    use noc_core::{Coord, Cycle, PacketId};

    use crate::{Node, Packet};

    fn packet(id: u64) -> Packet {
        Packet::new(PacketId(id), Coord::new(0, 0), Coord::new(1, 0), Cycle(0)).unwrap()
    }

    #[test]
    fn queue_is_fifo() {
        let mut n = Node::new(Coord::new(0, 0), false);
        n.enqueue(packet(1));
        n.enqueue(packet(2));
        n.enqueue(packet(3));
        let ids: Vec<u64> = n.take_queue().iter().map(|p| p.id().0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn take_queue_leaves_queue_empty() {
        let mut n = Node::new(Coord::new(0, 0), false);
        n.enqueue(packet(1));
        let snapshot = n.take_queue();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(n.queue_len(), 0);
        n.enqueue(packet(2));
        assert_eq!(n.queue_len(), 1);
    }

    #[test]
    fn receive_appends() {
        let mut n = Node::new(Coord::new(1, 0), true);
        assert!(n.is_memory_endpoint());
        n.receive(packet(4));
        n.receive(packet(5));
        assert_eq!(n.received().len(), 2);
        assert_eq!(n.received()[1].id(), PacketId(5));
    }
}

#[cfg(test)]
mod grid_tests {
    use noc_core::{Coord, Cycle, MeshShape, PacketId, SimRng};

    use crate::{Grid, Packet};

    fn grid(size: u32, fraction: f64) -> Grid {
        Grid::random(MeshShape::new(size).unwrap(), fraction, &mut SimRng::new(3))
    }

    #[test]
    fn nodes_laid_out_row_major() {
        let g = grid(3, 0.0);
        assert_eq!(g.len(), 9);
        for (i, node) in g.nodes().iter().enumerate() {
            assert_eq!(g.shape().index_of(node.coordinate()), Some(i));
        }
    }

    #[test]
    fn lookup_by_coordinate() {
        let mut g = grid(4, 0.0);
        assert_eq!(g.node(Coord::new(3, 2)).unwrap().coordinate(), Coord::new(3, 2));
        assert!(g.node(Coord::new(4, 0)).is_none());
        assert!(g.node_mut(Coord::new(0, 4)).is_none());
        assert!(g.checked_node_mut(Coord::new(9, 9)).is_err());
    }

    #[test]
    fn explicit_memory_flags() {
        let g = Grid::new(MeshShape::new(2).unwrap(), |c| c == Coord::new(1, 0));
        assert_eq!(g.memory_endpoints(), 1);
        assert!(g.node(Coord::new(1, 0)).unwrap().is_memory_endpoint());
        assert!(!g.node(Coord::new(0, 0)).unwrap().is_memory_endpoint());
    }

    #[test]
    fn memory_fraction_extremes() {
        assert_eq!(grid(4, 0.0).memory_endpoints(), 0);
        assert_eq!(grid(4, 1.0).memory_endpoints(), 16);
    }

    #[test]
    fn in_flight_and_delivered_counts() {
        let mut g = grid(2, 0.0);
        let p = |id| Packet::new(PacketId(id), Coord::new(0, 0), Coord::new(1, 1), Cycle(0)).unwrap();
        g.node_mut(Coord::new(1, 0)).unwrap().enqueue(p(1));
        g.node_mut(Coord::new(0, 1)).unwrap().enqueue(p(2));
        g.node_mut(Coord::new(1, 1)).unwrap().receive(p(3));
        assert_eq!(g.in_flight(), 2);
        assert_eq!(g.delivered(), 1);
    }
}

#[cfg(test)]
mod router_tests {
    use noc_core::{Coord, MeshShape};

    use crate::{DimensionOrderRouter, MeshError, RouteStep, Router};

    fn shape(n: u32) -> MeshShape {
        MeshShape::new(n).unwrap()
    }

    #[test]
    fn x_moves_before_y() {
        let r = DimensionOrderRouter::xy();
        let step = r.next_hop(shape(4), Coord::new(0, 0), Coord::new(2, 3)).unwrap();
        assert_eq!(step, RouteStep { next: Coord::new(1, 0), arrived: false });
    }

    #[test]
    fn y_moves_once_column_matches() {
        let r = DimensionOrderRouter::default();
        let step = r.next_hop(shape(4), Coord::new(2, 3), Coord::new(2, 1)).unwrap();
        assert_eq!(step.next, Coord::new(2, 2));
        assert!(!step.arrived);
    }

    #[test]
    fn decrements_toward_destination() {
        let r = DimensionOrderRouter::xy();
        let step = r.next_hop(shape(4), Coord::new(3, 0), Coord::new(2, 0)).unwrap();
        assert_eq!(step, RouteStep { next: Coord::new(2, 0), arrived: true });
    }

    #[test]
    fn yx_moves_y_first() {
        let r = DimensionOrderRouter::yx();
        let step = r.next_hop(shape(4), Coord::new(0, 0), Coord::new(2, 3)).unwrap();
        assert_eq!(step.next, Coord::new(0, 1));
        let step = r.next_hop(shape(4), Coord::new(0, 3), Coord::new(2, 3)).unwrap();
        assert_eq!(step.next, Coord::new(1, 3));
    }

    #[test]
    fn at_destination_is_an_error() {
        let r = DimensionOrderRouter::xy();
        let err = r.next_hop(shape(4), Coord::new(1, 1), Coord::new(1, 1));
        assert!(matches!(err, Err(MeshError::AlreadyAtDestination(_))));
    }

    #[test]
    fn outside_mesh_is_an_error() {
        let r = DimensionOrderRouter::xy();
        assert!(r.next_hop(shape(2), Coord::new(0, 0), Coord::new(2, 0)).is_err());
        assert!(r.next_hop(shape(2), Coord::new(5, 0), Coord::new(1, 0)).is_err());
    }

    #[test]
    fn every_pair_converges_in_manhattan_hops() {
        let s = shape(5);
        for router in [DimensionOrderRouter::xy(), DimensionOrderRouter::yx()] {
            for src in s.coords() {
                for dst in s.coords() {
                    let path = router.path(s, src, dst).unwrap();
                    assert_eq!(path.len() as u32, src.manhattan(dst), "{src} -> {dst}");

                    let mut prev = src;
                    for &hop in &path {
                        assert_eq!(prev.manhattan(hop), 1, "one link per hop");
                        assert!(hop.manhattan(dst) < prev.manhattan(dst));
                        prev = hop;
                    }
                    if let Some(&last) = path.last() {
                        assert_eq!(last, dst);
                    }
                }
            }
        }
    }

    #[test]
    fn arrived_flag_only_on_last_hop() {
        let r = DimensionOrderRouter::xy();
        let s = shape(4);
        let (src, dst) = (Coord::new(0, 0), Coord::new(3, 3));
        let mut at = src;
        let mut flags = Vec::new();
        while at != dst {
            let step = r.next_hop(s, at, dst).unwrap();
            flags.push(step.arrived);
            at = step.next;
        }
        assert_eq!(flags.len(), 6);
        assert!(flags[..5].iter().all(|&f| !f));
        assert!(flags[5]);
    }

    /// A router that never moves.
    struct Stuck;
    impl Router for Stuck {
        fn next_hop(&self, _s: MeshShape, current: Coord, _d: Coord) -> crate::MeshResult<RouteStep> {
            Ok(RouteStep { next: current, arrived: false })
        }
    }

    #[test]
    fn path_detects_non_progressing_router() {
        let err = Stuck.path(shape(3), Coord::new(0, 0), Coord::new(1, 0));
        assert!(matches!(err, Err(MeshError::NoProgress { .. })));
    }
}
