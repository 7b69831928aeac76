use crate::calendar::{add_days, EpochMillis, APR_3_2020, FEB_1_2020};
use crate::error::{Result, TimelineError};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub const OUTPUT_FILENAME: &str = "covid19_prob.csv";
pub const HEADERS: [&str; 4] = ["time", "Encounter for Test", "Terminal", "Wait Until Exposure"];

pub const START_MILLIS: EpochMillis = FEB_1_2020;
pub const STOP_MILLIS: EpochMillis = APR_3_2020;
/// Rows end like the excel csv dialect.
pub const LINE_TERMINATOR: &str = "\r\n";
pub const LUCKY_ONES: f64 = 0.1;
pub const PROBS_BY_WEEK: [f64; 9] = [0.0005, 0.0005, 0.0005, 0.0005, 0.0005, 0.01, 0.02, 0.2, 0.4];

const DAYS_PER_WEEK: i64 = 7;

/// Closed window of one week, `end` is one millisecond before the next window starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WeekWindow {
    pub start: EpochMillis,
    pub end: EpochMillis,
}

impl WeekWindow {
    pub fn first(start: EpochMillis) -> WeekWindow {
        WeekWindow {
            start,
            end: add_days(start, DAYS_PER_WEEK) - 1,
        }
    }

    pub fn next(&self) -> WeekWindow {
        WeekWindow {
            start: add_days(self.start, DAYS_PER_WEEK),
            end: add_days(self.end, DAYS_PER_WEEK),
        }
    }

    pub fn time_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    probs_by_week: BTreeMap<usize, f64>,
}

impl ProbabilityTable {
    pub fn new(probs: &[f64]) -> ProbabilityTable {
        ProbabilityTable {
            probs_by_week: probs.iter().cloned().enumerate().collect(),
        }
    }

    /// Probability of a positive encounter in `week`. Undefined weeks are an error, never a default.
    pub fn get(&self, week: usize) -> Result<f64> {
        self.probs_by_week
            .get(&week)
            .cloned()
            .ok_or(TimelineError::MissingProbability { week })
    }

    pub fn len(&self) -> usize {
        self.probs_by_week.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs_by_week.is_empty()
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        ProbabilityTable::new(&PROBS_BY_WEEK)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub week: usize,
    pub window: WeekWindow,
    pub time: String,
    pub encounter_for_test: f64,
    pub terminal: f64,
    pub wait_until_exposure: f64,
}

impl WeekRow {
    pub fn new(week: usize, window: WeekWindow, prob: f64, lucky_ones: f64) -> WeekRow {
        WeekRow {
            week,
            window,
            time: window.time_label(),
            encounter_for_test: prob,
            terminal: lucky_ones,
            wait_until_exposure: 1. - prob - lucky_ones,
        }
    }

    pub fn total(&self) -> f64 {
        self.encounter_for_test + self.terminal + self.wait_until_exposure
    }

    fn csv_line(&self) -> String {
        [
            self.time.clone(),
            self.encounter_for_test.to_string(),
            self.terminal.to_string(),
            self.wait_until_exposure.to_string(),
        ]
        .iter()
        .join(",")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub start: EpochMillis,
    pub stop: EpochMillis,
    pub lucky_ones: f64,
    pub probabilities: ProbabilityTable,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            start: START_MILLIS,
            stop: STOP_MILLIS,
            lucky_ones: LUCKY_ONES,
            probabilities: Default::default(),
        }
    }
}

impl TableConfig {
    /* Walks the weeks in order and hands every finished row to `emit`.
    The lookup happens before `emit`, so a missing week never produces a partial row. */
    fn for_each_row<F>(&self, mut emit: F) -> Result<usize>
    where
        F: FnMut(&WeekRow) -> Result<()>,
    {
        let mut week = 0;
        let mut window = WeekWindow::first(self.start);
        while window.end < self.stop {
            let prob = self.probabilities.get(week)?;
            let row = WeekRow::new(week, window, prob, self.lucky_ones);
            emit(&row)?;
            debug!(week, end = window.end, "row emitted");
            window = window.next();
            week += 1;
        }
        Ok(week)
    }

    pub fn rows(&self) -> Result<Vec<WeekRow>> {
        let mut rows = vec![];
        self.for_each_row(|row| {
            rows.push(row.clone());
            Ok(())
        })?;
        Ok(rows)
    }

    /// Writes the header and then one line per week as soon as it is computed.
    /// Returns the number of data rows.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<usize> {
        write!(writer, "{}{}", HEADERS.iter().join(","), LINE_TERMINATOR)?;
        self.for_each_row(|row| {
            write!(writer, "{}{}", row.csv_line(), LINE_TERMINATOR)?;
            Ok(())
        })
    }

    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        info!("writing file {}", path.display());
        let mut file = File::create(path)?;
        let number_of_rows = self.write_csv(&mut file)?;
        file.flush()?;
        info!(number_of_rows, "table complete");
        Ok(number_of_rows)
    }
}
