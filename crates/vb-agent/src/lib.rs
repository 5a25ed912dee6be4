//! `vb-agent`: human and mosquito records and the initial population factory.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`human`]      | `Human`, `HumanState`                                   |
//! | [`mosquito`]   | `Mosquito`                                              |
//! | [`population`] | `Population` — the two flat collections a run owns      |
//! | [`builder`]    | `PopulationBuilder`, [`initialize`] (population factory)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on agent records.       |

pub mod builder;
pub mod human;
pub mod mosquito;
pub mod population;

#[cfg(test)]
mod tests;

pub use builder::{PopulationBuilder, initialize};
pub use human::{Human, HumanState};
pub use mosquito::Mosquito;
pub use population::Population;
