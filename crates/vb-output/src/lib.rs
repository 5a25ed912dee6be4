//! `vb-output`: per-step statistics writers for rust_vb.
//!
//! One record per step:
//!
//! ```text
//! step,humanInfected,humanResistant,humanSusceptible,mosquitoInfected,mosquitoHungry
//! ```
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`StatsOutputObserver`], which implements `vb_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vb_output::{CsvWriter, StatsOutputObserver};
//!
//! let writer = CsvWriter::create(Path::new("simulation.csv"))?;
//! let mut obs = StatsOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsOutputObserver;
pub use row::StatsRow;
pub use writer::OutputWriter;
