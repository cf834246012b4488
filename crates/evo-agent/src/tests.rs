//! Unit tests for the species catalog, lifecycle rules, payoff table, and
//! strategy dispatch.

#[cfg(test)]
mod species {
    use crate::Species;

    #[test]
    fn catalog_indices_match_declaration_order() {
        for (i, &s) in Species::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Species::ALL[s.index()], s);
        }
    }

    #[test]
    fn catalog_count() {
        assert_eq!(Species::COUNT, 7);
    }

    #[test]
    fn names_are_unique() {
        for &a in &Species::ALL {
            for &b in &Species::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn memory_variants() {
        assert!(!Species::Dove.uses_memory());
        assert!(!Species::Hawk.uses_memory());
        assert!(Species::Retaliator.uses_memory());
        assert!(Species::Bully.uses_memory());
        assert!(!Species::Territorial.uses_memory());
        assert!(!Species::Gambler.uses_memory());
        assert!(Species::Mimic.uses_memory());
    }

    #[test]
    fn display_is_name() {
        assert_eq!(Species::Dove.to_string(), "dove");
        assert_eq!(Species::Territorial.to_string(), "territorial");
    }
}

#[cfg(test)]
mod payoff {
    use crate::{Outcome, resolve};

    #[test]
    fn table_is_exact() {
        assert_eq!(resolve(false, false), (Outcome::Draw, Outcome::Draw));
        assert_eq!(resolve(true, true), (Outcome::Escalation, Outcome::Escalation));
        assert_eq!(resolve(true, false), (Outcome::Win, Outcome::Loss));
        assert_eq!(resolve(false, true), (Outcome::Loss, Outcome::Win));
    }

    #[test]
    fn deltas_match_table() {
        assert_eq!(Outcome::Win.delta(), 75);
        assert_eq!(Outcome::Draw.delta(), 65);
        assert_eq!(Outcome::Loss.delta(), -25);
        assert_eq!(Outcome::Escalation.delta(), -65);
        assert_eq!(Outcome::Idle.delta(), -200);
    }

    #[test]
    fn swapped_inputs_swap_outputs() {
        for a in [false, true] {
            for b in [false, true] {
                let (x, y) = resolve(a, b);
                let (y2, x2) = resolve(b, a);
                assert_eq!((x, y), (x2, y2));
            }
        }
    }

    #[test]
    fn fight_deltas_are_bounded() {
        // No fight outcome gains more than 75 or loses more than 65.
        for a in [false, true] {
            for b in [false, true] {
                let (x, y) = resolve(a, b);
                for delta in [x.delta(), y.delta()] {
                    assert!(delta <= 75, "gain beyond table maximum: {delta}");
                    assert!(delta >= -65, "loss beyond table maximum: {delta}");
                }
            }
        }
    }
}

#[cfg(test)]
mod bird {
    use evo_core::BirdId;

    use crate::{Bird, Outcome, Species};

    #[test]
    fn fresh_bird_state() {
        let dove = Bird::new(BirdId(0), Species::Dove);
        assert_eq!(dove.points(), 0);
        assert!(!dove.memory());

        let retaliator = Bird::new(BirdId(1), Species::Retaliator);
        assert_eq!(retaliator.points(), 0);
        assert!(!retaliator.memory(), "memory defaults to peaceful");
    }

    #[test]
    fn memory_overwritten_on_observation() {
        let mut b = Bird::new(BirdId(0), Species::Retaliator);
        b.assign_points(Outcome::Loss, Some(true));
        assert!(b.memory());
        b.assign_points(Outcome::Draw, Some(false));
        assert!(!b.memory());
    }

    #[test]
    fn idle_sentinel_leaves_memory_unchanged() {
        let mut b = Bird::new(BirdId(0), Species::Retaliator);
        b.assign_points(Outcome::Loss, Some(true));
        b.assign_points(Outcome::Idle, None);
        assert!(b.memory(), "no-opponent update must not clear memory");
        assert_eq!(b.points(), -225);
    }

    #[test]
    fn memoryless_species_ignore_observations() {
        let mut b = Bird::new(BirdId(0), Species::Hawk);
        b.assign_points(Outcome::Win, Some(true));
        assert!(!b.memory());
    }

    #[test]
    fn death_at_threshold() {
        let mut b = Bird::new(BirdId(0), Species::Dove);
        for _ in 0..3 {
            b.assign_points(Outcome::Loss, Some(true));
        }
        assert_eq!(b.points(), -75);
        assert!(!b.is_dead());
        b.assign_points(Outcome::Loss, Some(true));
        assert_eq!(b.points(), -100);
        assert!(b.is_dead(), "death threshold is inclusive");
    }

    #[test]
    fn reproduction_resets_and_signals() {
        let mut b = Bird::new(BirdId(0), Species::Hawk);
        b.assign_points(Outcome::Win, Some(false));
        assert!(!b.maybe_reproduce(), "75 points is below the threshold");
        assert_eq!(b.points(), 75);

        b.assign_points(Outcome::Win, Some(false));
        assert_eq!(b.points(), 150);
        assert!(b.maybe_reproduce());
        assert_eq!(b.points(), 0, "reproduction resets points");
        assert!(!b.maybe_reproduce(), "only one offspring per crossing");
    }

    #[test]
    fn reproduction_at_exact_threshold() {
        // Two wins and two losses land on exactly 100.
        let mut b = Bird::new(BirdId(0), Species::Hawk);
        b.assign_points(Outcome::Win, Some(false));
        b.assign_points(Outcome::Win, Some(false));
        b.assign_points(Outcome::Loss, Some(true));
        b.assign_points(Outcome::Loss, Some(true));
        assert_eq!(b.points(), 100);
        assert!(b.maybe_reproduce(), "reproduction threshold is inclusive");
        assert_eq!(b.points(), 0);
    }

    #[test]
    fn death_and_reproduction_are_exclusive() {
        // A dead bird can never also qualify for reproduction: the
        // thresholds are 200 points apart and per-tick deltas are bounded
        // by the payoff table.
        let mut b = Bird::new(BirdId(0), Species::Dove);
        b.assign_points(Outcome::Idle, None);
        assert!(b.is_dead());
        assert!(!b.maybe_reproduce());
        assert_eq!(b.points(), -200);
    }

    #[test]
    fn scratch_birds_are_invalid() {
        let s = Bird::scratch(Species::Gambler);
        assert!(!s.id().is_valid());
        assert_eq!(s.points(), 0);
    }
}

#[cfg(test)]
mod strategy {
    use evo_core::{BirdId, BirdRng};

    use crate::{Bird, Outcome, Species, decide};

    fn rng() -> BirdRng {
        BirdRng::new(42, BirdId(0))
    }

    fn bird(species: Species) -> Bird {
        Bird::new(BirdId(0), species)
    }

    #[test]
    fn dove_never_fights() {
        let mut r = rng();
        let dove = bird(Species::Dove);
        let hawk = bird(Species::Hawk);
        for _ in 0..100 {
            assert!(!decide(&dove, &hawk, &mut r));
        }
    }

    #[test]
    fn hawk_always_fights() {
        let mut r = rng();
        let hawk = bird(Species::Hawk);
        let dove = bird(Species::Dove);
        for _ in 0..100 {
            assert!(decide(&hawk, &dove, &mut r));
        }
    }

    #[test]
    fn retaliator_replays_last_observation() {
        let mut r = rng();
        let opponent = bird(Species::Dove);
        let mut b = bird(Species::Retaliator);
        assert!(!decide(&b, &opponent, &mut r), "peaceful before any observation");

        b.assign_points(Outcome::Loss, Some(true));
        assert!(decide(&b, &opponent, &mut r));

        b.assign_points(Outcome::Draw, Some(false));
        assert!(!decide(&b, &opponent, &mut r));
    }

    #[test]
    fn bully_negates_last_observation() {
        let mut r = rng();
        let opponent = bird(Species::Dove);
        let mut b = bird(Species::Bully);
        assert!(decide(&b, &opponent, &mut r), "aggressive before any observation");

        b.assign_points(Outcome::Loss, Some(true));
        assert!(!decide(&b, &opponent, &mut r), "backs down once confronted");
    }

    #[test]
    fn territorial_always_escalates_against_kin() {
        let mut r = rng();
        let b = bird(Species::Territorial);
        let kin = bird(Species::Territorial);
        for _ in 0..1000 {
            assert!(decide(&b, &kin, &mut r));
        }
    }

    #[test]
    fn territorial_rarely_escalates_against_others() {
        let mut r = rng();
        let b = bird(Species::Territorial);
        let dove = bird(Species::Dove);
        let aggressive = (0..10_000).filter(|_| decide(&b, &dove, &mut r)).count();
        // Binomial(10 000, 0.1): mean 1 000, sd 30 — a ±200 band is > 6 sigma.
        assert!(
            (800..=1200).contains(&aggressive),
            "expected ~10% aggression, got {aggressive}/10000"
        );
    }

    #[test]
    fn gambler_produces_both_choices() {
        let mut r = rng();
        let b = bird(Species::Gambler);
        let dove = bird(Species::Dove);
        let heads = (0..1000).filter(|_| decide(&b, &dove, &mut r)).count();
        assert!((300..=700).contains(&heads), "coin flip badly skewed: {heads}/1000");
    }

    #[test]
    fn mimic_produces_both_choices() {
        let mut r = rng();
        let b = bird(Species::Mimic);
        let dove = bird(Species::Dove);
        let mut saw = [false, false];
        for _ in 0..1000 {
            saw[usize::from(decide(&b, &dove, &mut r))] = true;
        }
        assert_eq!(saw, [true, true]);
    }

    #[test]
    fn decide_never_mutates_either_bird() {
        let mut r = rng();
        let mut opponent = bird(Species::Retaliator);
        opponent.assign_points(Outcome::Draw, Some(true));
        let caller = bird(Species::Mimic);

        for _ in 0..500 {
            decide(&caller, &opponent, &mut r);
        }
        assert_eq!(opponent.points(), 65);
        assert!(opponent.memory());
        assert_eq!(caller.points(), 0);
        assert!(!caller.memory());
    }
}
