//! `evo-output` — output backends for recorded simulation data.
//!
//! The simulation core knows nothing about file formats; it exposes a
//! [`SimObserver`](evo_sim::SimObserver).  This crate bridges that trait to
//! pluggable [`OutputWriter`] backends:
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`row`]      | Plain data rows (`CensusRow`, `TickSummaryRow`)|
//! | [`writer`]   | The `OutputWriter` backend trait               |
//! | [`csv`]      | CSV backend (two files)                        |
//! | [`sqlite`]   | SQLite backend (feature `sqlite`)              |
//! | [`observer`] | `SimOutputObserver<W>` — the bridge            |
//!
//! # Cargo features
//!
//! | Feature  | Effect                          |
//! |----------|---------------------------------|
//! | `sqlite` | Enables the `rusqlite` backend. |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CensusRow, TickSummaryRow};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
pub use writer::OutputWriter;
