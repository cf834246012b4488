//! Fluent builder for constructing a [`Sim`].

use evo_agent::Species;
use evo_core::SimConfig;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig {
///     map_size: 500,
///     total_ticks: 300,
///     seed: 42,
///     num_threads: None,
///     census_interval_ticks: 1,
/// };
/// let mut sim = SimBuilder::new(config)
///     .populate(Species::Dove, 10)
///     .populate(Species::Hawk, 10)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
///
/// Seeding calls accumulate; the same species may appear more than once.
/// An entirely unseeded sim is valid — it runs to the configured tick count
/// recording all-zero censuses.
pub struct SimBuilder {
    config: SimConfig,
    seeds: Vec<(Species, usize)>,
}

impl SimBuilder {
    /// Create a builder for one run of `config`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            seeds: Vec::new(),
        }
    }

    /// Queue `count` freshly constructed birds of `species` for the initial
    /// population.
    pub fn populate(mut self, species: Species, count: usize) -> Self {
        self.seeds.push((species, count));
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    ///
    /// Rejects `num_threads == Some(0)`; a zero `map_size` is valid (nobody
    /// ever fights — see [`SimConfig::map_size`]).
    pub fn build(self) -> SimResult<Sim> {
        if self.config.num_threads == Some(0) {
            return Err(SimError::Config(
                "num_threads must be at least 1 (or None for all cores)".into(),
            ));
        }

        let mut sim = Sim::new(self.config);
        for (species, count) in self.seeds {
            sim.populate(species, count);
        }
        Ok(sim)
    }
}
