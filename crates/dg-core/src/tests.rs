//! Unit tests for dg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TileId};

    #[test]
    fn index_roundtrip() {
        let id = TileId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TileId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TileId(100) > TileId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TileId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(TileId(7).to_string(), "TileId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Direction, GridPoint, WorldPoint};

    #[test]
    fn step_and_opposite() {
        let p = GridPoint::new(2, 3);
        assert_eq!(p.step(Direction::North), GridPoint::new(2, 4));
        assert_eq!(p.step(Direction::East), GridPoint::new(3, 3));
        for dir in Direction::ALL {
            assert_eq!(p.step(dir).step(dir.opposite()), p);
        }
    }

    #[test]
    fn manhattan_matches_steps() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(4, 4);
        assert_eq!(a.manhattan_distance(b), 8);
        assert_eq!(b.manhattan_distance(a), 8);
    }

    #[test]
    fn euclidean_is_lower_bound_of_manhattan() {
        let a = GridPoint::new(-1, 2);
        let b = GridPoint::new(3, -5);
        assert!(a.euclidean_distance(b) <= a.manhattan_distance(b) as f32);
    }

    #[test]
    fn euclidean_diagonal() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(3, 4);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn world_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5); // 1 tick = half a second
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 1.0);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.5);
        assert_eq!(clock.ticks_for_secs(1.0), 2);
        // Partial tick rounds up so cooldowns never expire early.
        assert_eq!(clock.ticks_for_secs(1.1), 3);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            tick_duration_secs:      1.0,
            total_ticks:             100,
            seed:                    42,
            snapshot_interval_ticks: 10,
        };
        assert_eq!(cfg.end_tick(), Tick(100));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn choose_from_slice() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let items = [1, 2, 3];
        for _ in 0..50 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
