//! The closed catalog of strategy variants.

use std::fmt;

/// One of the fixed set of strategy-selection policies.
///
/// A bird's species is immutable after creation and fully determines its
/// decision policy; all mutable state (points, memory) lives on [`Bird`].
///
/// [`Bird`]: crate::Bird
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Always conciliatory.
    Dove,
    /// Always confrontational.
    Hawk,
    /// Tit-for-tat: replays the opponent choice it last observed.
    Retaliator,
    /// Anti-tit-for-tat: plays the negation of the last observed choice.
    Bully,
    /// Escalates unconditionally against its own species; otherwise
    /// confrontational with probability 0.1.
    Territorial,
    /// Uniform coin flip every fight.
    Gambler,
    /// Delegates each decision to a fresh throwaway instance of a uniformly
    /// random catalog species.
    Mimic,
}

impl Species {
    /// The full catalog, in declaration order.  Also the sampling pool for
    /// [`Mimic`](Species::Mimic) and the key set of the population history.
    pub const ALL: [Species; 7] = [
        Species::Dove,
        Species::Hawk,
        Species::Retaliator,
        Species::Bully,
        Species::Territorial,
        Species::Gambler,
        Species::Mimic,
    ];

    /// Number of species in the catalog.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index into per-species arrays; `ALL[s.index()] == s`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name, used as the species key in output files.
    pub const fn name(self) -> &'static str {
        match self {
            Species::Dove => "dove",
            Species::Hawk => "hawk",
            Species::Retaliator => "retaliator",
            Species::Bully => "bully",
            Species::Territorial => "territorial",
            Species::Gambler => "gambler",
            Species::Mimic => "mimic",
        }
    }

    /// `true` for variants whose decision reads the last observed opponent
    /// choice.  Only these carry a memory field on [`Bird`](crate::Bird).
    pub const fn uses_memory(self) -> bool {
        matches!(self, Species::Retaliator | Species::Bully | Species::Mimic)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
