//! Unit tests for noc-traffic.

#[cfg(test)]
mod uniform_tests {
    use noc_core::{Coord, Cycle, MeshShape, NodeRng};

    use crate::{Injection, TrafficModel, UniformTraffic};

    #[test]
    fn rate_outside_unit_interval_rejected() {
        assert!(UniformTraffic::new(-0.01).is_err());
        assert!(UniformTraffic::new(1.01).is_err());
        assert!(UniformTraffic::new(f64::NAN).is_err());
        assert!(UniformTraffic::new(0.0).is_ok());
        assert!(UniformTraffic::new(1.0).is_ok());
    }

    #[test]
    fn zero_rate_never_injects() {
        let t = UniformTraffic::new(0.0).unwrap();
        let shape = MeshShape::new(4).unwrap();
        let mut rng = NodeRng::new(1, 0);
        for c in 0..500 {
            assert_eq!(t.inject(Coord::new(0, 0), Cycle(c), shape, &mut rng), Injection::Idle);
        }
    }

    #[test]
    fn single_node_mesh_only_self_draws() {
        let t = UniformTraffic::new(1.0).unwrap();
        let shape = MeshShape::new(1).unwrap();
        let mut rng = NodeRng::new(1, 0);
        for c in 0..100 {
            assert_eq!(t.inject(Coord::new(0, 0), Cycle(c), shape, &mut rng), Injection::SelfDraw);
        }
    }

    #[test]
    fn destinations_stay_inside_mesh_and_skip_self() {
        let t = UniformTraffic::new(1.0).unwrap();
        let shape = MeshShape::new(3).unwrap();
        let src = Coord::new(1, 1);
        let mut rng = NodeRng::new(7, 4);
        let mut self_draws = 0;
        let mut seen = std::collections::HashSet::new();
        for c in 0..2_000 {
            match t.inject(src, Cycle(c), shape, &mut rng) {
                Injection::To(d) => {
                    assert!(shape.contains(d));
                    assert_ne!(d, src);
                    seen.insert(d);
                }
                Injection::SelfDraw => self_draws += 1,
                Injection::Idle => panic!("rate 1.0 must always draw"),
            }
        }
        // All 8 other nodes are reachable; roughly 1/9 of draws hit the source.
        assert_eq!(seen.len(), 8);
        assert!((100..350).contains(&self_draws), "self draws: {self_draws}");
    }

    #[test]
    fn same_seed_same_draws() {
        let t = UniformTraffic::new(0.3).unwrap();
        let shape = MeshShape::new(8).unwrap();
        let mut a = NodeRng::new(11, 5);
        let mut b = NodeRng::new(11, 5);
        for c in 0..200 {
            let src = Coord::new(5, 0);
            assert_eq!(t.inject(src, Cycle(c), shape, &mut a), t.inject(src, Cycle(c), shape, &mut b));
        }
    }
}

#[cfg(test)]
mod scripted_tests {
    use noc_core::{Coord, Cycle, MeshShape, NodeRng};

    use crate::{Injection, NoTraffic, ScriptedTraffic, TrafficError, TrafficModel};

    fn shape() -> MeshShape {
        MeshShape::new(2).unwrap()
    }

    #[test]
    fn injects_only_listed_entries() {
        let t = ScriptedTraffic::from_entries([
            (Cycle(0), Coord::new(0, 0), Coord::new(1, 1)),
            (Cycle(3), Coord::new(1, 0), Coord::new(0, 1)),
        ])
        .unwrap();
        let mut rng = NodeRng::new(0, 0);
        assert_eq!(t.len(), 2);
        assert_eq!(t.inject(Coord::new(0, 0), Cycle(0), shape(), &mut rng), Injection::To(Coord::new(1, 1)));
        assert_eq!(t.inject(Coord::new(0, 0), Cycle(1), shape(), &mut rng), Injection::Idle);
        assert_eq!(t.inject(Coord::new(1, 0), Cycle(3), shape(), &mut rng), Injection::To(Coord::new(0, 1)));
        assert_eq!(t.inject(Coord::new(1, 1), Cycle(0), shape(), &mut rng), Injection::Idle);
    }

    #[test]
    fn self_addressed_entry_reports_self_draw() {
        let mut t = ScriptedTraffic::new();
        t.push(Cycle(0), Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        let mut rng = NodeRng::new(0, 0);
        assert_eq!(t.inject(Coord::new(1, 1), Cycle(0), shape(), &mut rng), Injection::SelfDraw);
    }

    #[test]
    fn duplicate_entry_rejected() {
        let err = ScriptedTraffic::from_entries([
            (Cycle(2), Coord::new(0, 0), Coord::new(1, 0)),
            (Cycle(2), Coord::new(0, 0), Coord::new(0, 1)),
        ]);
        assert!(matches!(err, Err(TrafficError::DuplicateInjection { .. })));
    }

    #[test]
    fn no_traffic_is_idle() {
        let mut rng = NodeRng::new(0, 0);
        assert_eq!(NoTraffic.inject(Coord::new(0, 0), Cycle(0), shape(), &mut rng), Injection::Idle);
    }
}
