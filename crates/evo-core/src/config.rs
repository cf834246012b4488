//! Top-level simulation configuration.

use crate::Tick;

/// Configuration for one simulation run.
///
/// Typically built in code by the application crate; with the `serde` feature
/// it can also be loaded from a TOML/JSON file.
///
/// `map_size` caps how many PAIRS fight per tick, not the population size —
/// the live population may grow well past it, in which case the overflow
/// birds sit out the tick (and pay the idle penalty for it).  A capacity of
/// zero is a valid, if brutal, configuration: nobody fights, everybody
/// starves.  Negative capacity is unrepresentable by type.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Maximum number of fighting pairs per tick.
    pub map_size: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results,
    /// with or without the `parallel` feature.
    pub seed: u64,

    /// Worker thread count passed to Rayon by the application when the
    /// `parallel` feature is enabled.  `None` uses all logical cores.
    /// `Some(0)` is rejected at build time.
    pub num_threads: Option<usize>,

    /// Invoke the observer's census hook every N ticks.  1 = every tick;
    /// 0 disables the hook.  The internal population history is recorded
    /// every tick regardless.
    pub census_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
