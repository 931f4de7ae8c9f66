//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv`
//! - `tick_counts.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{FrameRow, OutputResult, TickCountsRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    frames:   Writer<File>,
    counts:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(["agent_id", "tick", "x", "y", "compartment"])?;

        let mut counts = Writer::from_path(dir.join("tick_counts.csv"))?;
        counts.write_record(["tick", "susceptible", "exposed", "infected", "vaccinated", "removed"])?;

        Ok(Self {
            frames,
            counts,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.compartment.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_counts(&mut self, row: &TickCountsRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infected.to_string(),
            row.vaccinated.to_string(),
            row.removed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.counts.flush()?;
        Ok(())
    }
}
