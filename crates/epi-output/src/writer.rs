//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FrameRow, OutputResult, TickCountsRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`RunOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of per-agent frame rows.
    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()>;

    /// Write one tick-counts row.
    fn write_tick_counts(&mut self, row: &TickCountsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
