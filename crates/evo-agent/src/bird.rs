//! Per-bird mutable state and lifecycle rules.

use evo_core::BirdId;

use crate::{Outcome, Species};

/// A bird dies the tick its points are observed at or below this.
pub const DEATH_THRESHOLD: i32 = -100;

/// A bird at or above this spawns one offspring and resets to zero.
pub const REPRODUCTION_THRESHOLD: i32 = 100;

/// One live agent: an immutable species plus mutable points and memory.
///
/// `points` is private on purpose — the only write paths are
/// [`assign_points`](Bird::assign_points) and the reset inside
/// [`maybe_reproduce`](Bird::maybe_reproduce), so the lifecycle invariants
/// cannot be bypassed from outside the crate.
#[derive(Clone, Debug)]
pub struct Bird {
    id: BirdId,
    species: Species,
    points: i32,
    /// Last observed opponent choice.  `Some` only for species where
    /// [`Species::uses_memory`] holds; starts at `Some(false)` for those
    /// ("assume peace until shown otherwise") and stays `None` for the rest.
    memory: Option<bool>,
}

impl Bird {
    /// A fresh bird: zero points, default memory, nothing inherited.
    pub fn new(id: BirdId, species: Species) -> Self {
        Self {
            id,
            species,
            points: 0,
            memory: species.uses_memory().then_some(false),
        }
    }

    /// A throwaway bird that never joins the population — used by the mimic
    /// strategy to borrow another species' decision function.
    pub fn scratch(species: Species) -> Self {
        Self::new(BirdId::INVALID, species)
    }

    #[inline]
    pub fn id(&self) -> BirdId {
        self.id
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn points(&self) -> i32 {
        self.points
    }

    /// The last observed opponent choice; `false` before any observation
    /// (and always `false` for species without memory).
    #[inline]
    pub fn memory(&self) -> bool {
        self.memory.unwrap_or(false)
    }

    /// Overwrite the memory field if this species carries one.  No-op
    /// otherwise.  Used when the mimic seeds a scratch delegate.
    pub(crate) fn seed_memory(&mut self, observed: bool) {
        if self.memory.is_some() {
            self.memory = Some(observed);
        }
    }

    /// Apply one outcome's point delta and record the opponent's choice.
    ///
    /// `opponent_choice` is `None` for the idle penalty — there was no
    /// opponent, so memory must remain untouched.
    pub fn assign_points(&mut self, outcome: Outcome, opponent_choice: Option<bool>) {
        self.points += outcome.delta();
        if self.memory.is_some() {
            if let Some(choice) = opponent_choice {
                self.memory = Some(choice);
            }
        }
    }

    /// `true` once points have sunk to the death threshold.  Checked once
    /// per tick, after fights and idle penalties; always checked BEFORE
    /// reproduction.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.points <= DEATH_THRESHOLD
    }

    /// If points have reached the reproduction threshold, reset them to zero
    /// and return `true` — the caller spawns one fresh same-species
    /// offspring.  Otherwise `false`, state untouched.
    pub fn maybe_reproduce(&mut self) -> bool {
        if self.points >= REPRODUCTION_THRESHOLD {
            self.points = 0;
            true
        } else {
            false
        }
    }
}
