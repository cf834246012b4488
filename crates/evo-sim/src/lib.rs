//! `evo-sim` — tick loop orchestrator for the rust_evo framework.
//!
//! # The tick cycle
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Shuffle   — permute the live list (and the aligned RNG streams).
//!   ② Fight     — k = min(map_size, live / 2) pairs at positions
//!                 (2i, 2i+1): decide × 2 → payoff table → points + memory.
//!   ③ Idle      — every bird at position >= 2k pays the idle penalty
//!                 (−200, no opponent observed).
//!   ④ Cull      — points <= −100 marks the bird for removal; else
//!     + spawn     points >= 100 resets to 0 and queues one offspring.
//!   ⑤ Rebuild   — survivors ++ offspring, in one pass.
//!   ⑥ Record    — census appended to the history for every species.
//! ```
//!
//! A tick is the atomic unit of observable state change: the history gains
//! exactly one entry per completed tick, and no observer hook fires mid-tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Resolves disjoint fight pairs on Rayon's thread pool.      |
//! | `serde`    | History serializes as a species-name → counts map.         |
//!
//! Per-bird RNG sub-streams make the `parallel` build bit-identical to the
//! sequential one under the same seed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evo_agent::Species;
//! use evo_core::SimConfig;
//! use evo_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config)
//!     .populate(Species::Dove, 10)
//!     .populate(Species::Hawk, 10)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! println!("{:?}", sim.history().series(Species::Dove));
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::{Census, PopulationHistory};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickStats};
