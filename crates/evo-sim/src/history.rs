//! Per-species population counts: one-tick censuses and the run-long history.

use evo_agent::{Bird, Species};

// ── Census ────────────────────────────────────────────────────────────────────

/// Population counts for every catalog species at one instant.
///
/// Always covers the whole catalog — extinct and never-seeded species report
/// zero rather than being absent.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Census {
    counts: [u32; Species::COUNT],
}

impl Census {
    /// Count the live population by species.
    pub fn of(birds: &[Bird]) -> Self {
        let mut counts = [0u32; Species::COUNT];
        for bird in birds {
            counts[bird.species().index()] += 1;
        }
        Self { counts }
    }

    /// Live count for one species.
    #[inline]
    pub fn count(&self, species: Species) -> u32 {
        self.counts[species.index()]
    }

    /// Total live population.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate `(species, count)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, u32)> + '_ {
        Species::ALL.iter().map(move |&s| (s, self.counts[s.index()]))
    }
}

// ── PopulationHistory ─────────────────────────────────────────────────────────

/// Append-only per-species count series, one entry per completed tick.
///
/// Owned by the population engine; consumers get it by shared reference
/// (`Sim::history()`) after — or between — runs, so it cannot be mutated
/// from outside.
#[derive(Clone, Debug, Default)]
pub struct PopulationHistory {
    series: [Vec<u32>; Species::COUNT],
}

impl PopulationHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one tick's census to every species' series.
    pub(crate) fn record(&mut self, census: &Census) {
        for (species, count) in census.iter() {
            self.series[species.index()].push(count);
        }
    }

    /// Number of ticks recorded so far.  Every series has this length.
    pub fn ticks_recorded(&self) -> usize {
        self.series[0].len()
    }

    /// The full count series for one species, oldest tick first.
    pub fn series(&self, species: Species) -> &[u32] {
        &self.series[species.index()]
    }

    /// Iterate `(species, series)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Species, &[u32])> + '_ {
        Species::ALL.iter().map(move |&s| (s, self.series[s.index()].as_slice()))
    }
}

/// Serializes as a map from species name to count series, ready for external
/// plotting tools.
#[cfg(feature = "serde")]
impl serde::Serialize for PopulationHistory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Species::COUNT))?;
        for (species, series) in self.iter() {
            map.serialize_entry(species.name(), series)?;
        }
        map.end()
    }
}
