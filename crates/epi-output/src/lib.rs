//! `epi-output` — simulation output writers for the epidemic simulator.
//!
//! Two row streams are produced per run:
//!
//! | File              | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | `frames.csv`      | one row per agent per frame tick (position + state) |
//! | `tick_counts.csv` | one row per tick (compartment counts)               |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`RunOutputObserver`], which implements `epi_sim::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! run.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{FrameRow, TickCountsRow};
pub use writer::OutputWriter;
