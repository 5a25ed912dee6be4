//! `vb-sim`: the per-step update and the tick loop runner.
//!
//! # One step
//!
//! ```text
//! for each mosquito (population order):
//!   ① Move          — random −1/0/+1 per axis, corrected at the grid edge.
//!   ② Bite scan     — for each human (population order): co-located and
//!                     hungry → bite draw → bed-net gate → transmission.
//!   ③ Vitals        — die-and-respawn draw, then get-hungry draw; tally.
//! for each human (population order):
//!   ④ Vitals        — respawn dead, background death, cure, disease death;
//!                     tally.
//! ```
//!
//! All draws come from a single [`SimRng`][vb_core::SimRng] in exactly this
//! order, so a seeded run is reproducible.  Every human's possible infection
//! this step is resolved in ①–③ before ④ starts.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vb_core::{ModelConfig, RunConfig};
//! use vb_sim::{SimBuilder, StatsHistory};
//!
//! let mut sim = SimBuilder::new(ModelConfig::default(), RunConfig::default()).build()?;
//! let mut history = StatsHistory::default();
//! sim.run(&mut history);
//! ```

pub mod builder;
pub mod error;
pub mod intervention;
pub mod movement;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod step;
pub mod transmission;
pub mod vitals;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use intervention::{NET_PASS_PROB, NetPolicy};
pub use observer::{LogProgress, NoopObserver, SimObserver, StatsHistory};
pub use sim::Sim;
pub use stats::StepStatistics;
pub use step::step;
pub use transmission::BiteOutcome;
