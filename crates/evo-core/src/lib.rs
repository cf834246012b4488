//! `evo-core` — foundational types for the `rust_evo` evolutionary game
//! framework.
//!
//! This crate is a dependency of every other `evo-*` crate.  It intentionally
//! has no `evo-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`ids`]    | `BirdId`                                  |
//! | [`time`]   | `Tick`                                    |
//! | [`config`] | `SimConfig`                               |
//! | [`rng`]    | `BirdRng` (per-bird), `SimRng` (run-level)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use ids::BirdId;
pub use rng::{BirdRng, SimRng};
pub use time::Tick;
