//! Unit tests for noc-core primitives.

#[cfg(test)]
mod coord {
    use crate::{Coord, MeshShape};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 3);
        let b = Coord::new(2, 1);
        assert_eq!(a.manhattan(b), 4);
        assert_eq!(b.manhattan(a), 4);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn row_major_index_roundtrip() {
        let shape = MeshShape::new(4).unwrap();
        assert_eq!(shape.index_of(Coord::new(1, 2)), Some(9));
        assert_eq!(shape.coord_at(9), Coord::new(1, 2));
        for (i, c) in shape.coords().enumerate() {
            assert_eq!(shape.index_of(c), Some(i));
        }
    }

    #[test]
    fn outside_mesh_has_no_index() {
        let shape = MeshShape::new(3).unwrap();
        assert!(shape.index_of(Coord::new(3, 0)).is_none());
        assert!(shape.index_of(Coord::new(0, 3)).is_none());
        assert!(shape.checked_index(Coord::new(5, 5)).is_err());
    }

    #[test]
    fn zero_size_rejected() {
        assert!(MeshShape::new(0).is_err());
    }

    #[test]
    fn coords_cover_every_node_once() {
        let shape = MeshShape::new(3).unwrap();
        let all: Vec<_> = shape.coords().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[1], Coord::new(1, 0));
        assert_eq!(all[3], Coord::new(0, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(MeshShape::new(8).unwrap().to_string(), "8x8 mesh");
    }
}

#[cfg(test)]
mod ids {
    use crate::{Cycle, PacketId};

    #[test]
    fn injection_ids_are_unique_per_cycle_and_node() {
        let n = 16;
        let a = PacketId::for_injection(Cycle(0), 15, n);
        let b = PacketId::for_injection(Cycle(1), 0, n);
        assert_ne!(a, b);
        assert_eq!(a.0 + 1, b.0);
    }

    #[test]
    fn display() {
        assert_eq!(PacketId(7).to_string(), "PacketId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Cycle;

    #[test]
    fn arithmetic() {
        let c = Cycle(10);
        assert_eq!(c.offset(5), Cycle(15));
        assert_eq!(c + 3, Cycle(13));
        assert_eq!(Cycle(15) - c, 5);
        assert_eq!(Cycle(15).since(c), 5);
    }

    #[test]
    fn advance_and_interval() {
        let mut c = Cycle::ZERO;
        c.advance();
        c.advance();
        assert_eq!(c, Cycle(2));
        assert!(Cycle(10).is_multiple_of(5));
        assert!(!Cycle(11).is_multiple_of(5));
        assert!(!Cycle(10).is_multiple_of(0));
    }

    #[test]
    fn display() {
        assert_eq!(Cycle(42).to_string(), "C42");
    }
}

#[cfg(test)]
mod rng {
    use crate::{NodeRng, SimRng};

    #[test]
    fn node_rng_deterministic() {
        let mut a = NodeRng::new(99, 7);
        let mut b = NodeRng::new(99, 7);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_nodes_diverge() {
        let mut a = NodeRng::new(99, 0);
        let mut b = NodeRng::new(99, 1);
        let va: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let vb: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = NodeRng::new(1, 0);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
        let mut sim = SimRng::new(1);
        assert!((0..100).all(|_| !sim.gen_bool(0.0)));
    }
}

#[cfg(test)]
mod config {
    use crate::{OverflowPolicy, QueueLimit, SimConfig};

    #[test]
    fn defaults_match_reference_model() {
        let c = SimConfig::default();
        assert_eq!(c.grid_size, 4);
        assert_eq!(c.memory_delay, 200);
        assert_eq!(c.injection_rate, 0.3);
        assert_eq!(c.memory_endpoint_fraction, 0.2);
        assert!(c.queue_limit.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn new_overrides_size_and_delay() {
        let c = SimConfig::new(8, 0);
        assert_eq!(c.grid_size, 8);
        assert_eq!(c.memory_delay, 0);
        assert_eq!(c.injection_rate, 0.3);
    }

    #[test]
    fn zero_grid_rejected() {
        assert!(SimConfig::new(0, 200).validate().is_err());
    }

    #[test]
    fn probabilities_not_clamped() {
        let mut c = SimConfig::default();
        c.injection_rate = 1.5;
        assert!(c.validate().is_err());
        c.injection_rate = -0.1;
        assert!(c.validate().is_err());
        c.injection_rate = f64::NAN;
        assert!(c.validate().is_err());
        c.injection_rate = 1.0;
        assert!(c.validate().is_ok());

        c.memory_endpoint_fraction = 2.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut c = SimConfig::default();
        c.queue_limit = Some(QueueLimit { capacity: 0, policy: OverflowPolicy::Drop });
        assert!(c.validate().is_err());
        c.queue_limit = Some(QueueLimit { capacity: 1, policy: OverflowPolicy::Stall });
        assert!(c.validate().is_ok());
    }
}
