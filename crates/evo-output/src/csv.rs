//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `census.csv` — one row per species per recorded tick
//! - `tick_summaries.csv` — one row per tick

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use crate::writer::OutputWriter;
use crate::{CensusRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    census: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut census = Writer::from_path(dir.join("census.csv"))?;
        census.write_record(["tick", "species", "count"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "population", "fights", "idle", "deaths", "births"])?;

        Ok(Self {
            census,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_census(&mut self, rows: &[CensusRow]) -> OutputResult<()> {
        for row in rows {
            self.census.write_record(&[
                row.tick.to_string(),
                row.species.to_string(),
                row.count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.population.to_string(),
            row.fights.to_string(),
            row.idle.to_string(),
            row.deaths.to_string(),
            row.births.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.census.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
