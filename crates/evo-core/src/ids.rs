//! Strongly typed bird identifier.
//!
//! A `BirdId` is unique for the lifetime of one run: the population engine
//! hands them out from a monotonic counter, and ids of culled birds are never
//! reused.  The id is NOT a position — the live list is reshuffled every tick
//! — it exists to give each bird a stable RNG sub-stream and a stable identity
//! in debug output.

use std::fmt;

/// Run-unique bird identifier.
///
/// `INVALID` marks transient scratch birds (see the mimic strategy) that are
/// never inserted into the live population.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirdId(pub u32);

impl BirdId {
    /// Sentinel meaning "not a live population member".
    pub const INVALID: BirdId = BirdId(u32::MAX);

    /// `true` for ids handed out by the population engine.
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl fmt::Display for BirdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BirdId({})", self.0)
    }
}
