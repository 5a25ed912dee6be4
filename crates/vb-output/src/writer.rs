//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StatsRow};

/// Sink for per-step statistics.
///
/// Errors are stored by [`StatsOutputObserver`][crate::StatsOutputObserver]
/// and retrieved with `take_error` once the run is over.
pub trait OutputWriter {
    /// Write one step's row.
    fn write_row(&mut self, row: &StatsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
