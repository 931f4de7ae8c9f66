//! `RunOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use epi_agent::Population;
use epi_core::{StateCounts, Tick};
use epi_sim::RunObserver;

use crate::row::{FrameRow, TickCountsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`RunObserver`] that writes per-agent frames and per-tick counts to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RunObserver` methods
/// have no return value.  After `run.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:       W,
    rows_written: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `run.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_frame(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<FrameRow> = population
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                FrameRow {
                    agent_id:    agent.0,
                    tick:        tick.0,
                    x:           population.pos_x[i],
                    y:           population.pos_y[i],
                    compartment: population.compartment(agent),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_frames(&rows);
            self.store_err(result);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
        let row = TickCountsRow::from_counts(tick, counts);
        let result = self.writer.write_tick_counts(&row);
        self.rows_written += 1;
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick, results: &[StateCounts]) {
        // A burned-out run records a terminal census that has no tick-end
        // event; entry `i` of the results series belongs to tick `i`, so any
        // unwritten tail is flushed here before closing.
        for (i, counts) in results.iter().enumerate().skip(self.rows_written) {
            let row = TickCountsRow::from_counts(Tick(i as u64), counts);
            let result = self.writer.write_tick_counts(&row);
            self.rows_written += 1;
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
