//! `evo-agent` — the birds themselves: species catalog, per-bird state and
//! lifecycle, the payoff table, and strategy dispatch.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`species`]  | `Species` — the closed catalog of strategy variants  |
//! | [`bird`]     | `Bird` — points, memory, death and reproduction      |
//! | [`payoff`]   | `Outcome` and the fight-resolution payoff table      |
//! | [`strategy`] | `decide` — single dispatch over the species catalog  |
//!
//! The strategy set is deliberately a closed enum, not a trait object: the
//! catalog is fixed at build time, every `match` over it is exhaustive, and
//! adding a variant is a compile-error-guided change.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod bird;
pub mod payoff;
pub mod species;
pub mod strategy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bird::{Bird, DEATH_THRESHOLD, REPRODUCTION_THRESHOLD};
pub use payoff::{Outcome, resolve};
pub use species::Species;
pub use strategy::decide;
