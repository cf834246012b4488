//! Strategy dispatch — one pure-ish decision function over the whole catalog.
//!
//! `decide` reads the deciding bird and its opponent, draws randomness only
//! from the deciding bird's own RNG stream, and returns `true` for
//! "confrontational".  It never mutates either bird: memory updates happen
//! exclusively through [`Bird::assign_points`] after the fight resolves.

use evo_core::BirdRng;

use crate::{Bird, Species};

/// Probability that a territorial bird escalates against a foreign species.
const TERRITORIAL_AGGRESSION: f64 = 0.1;

/// Choose a strategy for `bird` against `opponent`.
///
/// Stochastic variants (territorial, gambler, mimic) draw from `rng`, which
/// must be the deciding bird's own stream so runs stay deterministic under a
/// fixed seed regardless of fight-evaluation order.
pub fn decide(bird: &Bird, opponent: &Bird, rng: &mut BirdRng) -> bool {
    match bird.species() {
        Species::Dove => false,
        Species::Hawk => true,
        Species::Retaliator => bird.memory(),
        Species::Bully => !bird.memory(),
        Species::Territorial => {
            if opponent.species() == bird.species() {
                true
            } else {
                rng.gen_bool(TERRITORIAL_AGGRESSION)
            }
        }
        Species::Gambler => rng.random(),
        Species::Mimic => {
            // Borrow a uniformly random catalog species' decision function
            // via a throwaway instance.  Memory-based delegates inherit the
            // mimic's own observation; the scratch bird is dropped right
            // after, never entering the population.  A sampled mimic
            // delegates again — termination is probabilistic.
            let sampled = Species::ALL[rng.gen_range(0..Species::ALL.len())];
            let mut delegate = Bird::scratch(sampled);
            if sampled.uses_memory() {
                delegate.seed_memory(bird.memory());
            }
            decide(&delegate, opponent, rng)
        }
    }
}
