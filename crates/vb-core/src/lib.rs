//! `vb-core`: foundational types for the `rust_vb` vector-borne disease model.
//!
//! This crate is a dependency of every other `vb-*` crate.  It has no `vb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`ids`]     | `HumanId`, `MosquitoId`                                |
//! | [`grid`]    | `Cell`, `GridSpace` (bounds policy)                    |
//! | [`time`]    | `Tick`, `RunConfig`                                    |
//! | [`config`]  | `ModelConfig` and its validation                       |
//! | [`rng`]     | `SimRng` (single seeded stream per run)                |
//! | [`error`]   | `ConfigError`, `ConfigResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ModelConfig;
pub use error::{ConfigError, ConfigResult};
pub use grid::{Cell, GridSpace};
pub use ids::{HumanId, MosquitoId};
pub use rng::SimRng;
pub use time::{RunConfig, Tick};
