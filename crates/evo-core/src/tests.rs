//! Unit tests for evo-core primitives.

#[cfg(test)]
mod ids {
    use crate::BirdId;

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(BirdId::INVALID.0, u32::MAX);
        assert!(!BirdId::INVALID.is_valid());
        assert!(BirdId(0).is_valid());
    }

    #[test]
    fn ordering() {
        assert!(BirdId(0) < BirdId(1));
    }

    #[test]
    fn display() {
        assert_eq!(BirdId(7).to_string(), "BirdId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod config {
    use crate::{SimConfig, Tick};

    #[test]
    fn end_tick() {
        let cfg = SimConfig {
            map_size: 500,
            total_ticks: 300,
            seed: 42,
            num_threads: None,
            census_interval_ticks: 1,
        };
        assert_eq!(cfg.end_tick(), Tick(300));
    }
}

#[cfg(test)]
mod rng {
    use crate::{BirdId, BirdRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = BirdRng::new(12345, BirdId(0));
        let mut r2 = BirdRng::new(12345, BirdId(0));
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_birds_differ() {
        let mut r0 = BirdRng::new(1, BirdId(0));
        let mut r1 = BirdRng::new(1, BirdId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "streams for adjacent bird ids should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = BirdRng::new(0, BirdId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0usize..7);
            assert!(v < 7);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = BirdRng::new(0, BirdId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_is_deterministic() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b: Vec<u32> = (0..32).collect();
        SimRng::new(9).shuffle(&mut a);
        SimRng::new(9).shuffle(&mut b);
        assert_eq!(a, b);
    }
}
