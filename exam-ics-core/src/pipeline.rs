use std::collections::HashSet;

use crate::{CalendarEvent, ExamCalendar, event::format_duration, schedule::ExamSchedule};

/// Collects calendar events for requested module codes.
///
/// Requests are processed in call order and rows for each module in load
/// order. Unknown codes are warned about once each and recorded; rows whose
/// date or time cells fail to parse are skipped without failing the run.
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    events: Vec<CalendarEvent>,
    missing: Vec<String>,
    warned: HashSet<String>,
    skipped_rows: usize,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every event for one module code.
    ///
    /// A code absent from the schedule produces a single warning even when
    /// requested repeatedly. A code present in the schedule is processed on
    /// every request, so a duplicated request duplicates its events.
    pub fn add_module(&mut self, schedule: &ExamSchedule, code: &str) {
        if !schedule.has_module(code) {
            if self.warned.insert(code.to_string()) {
                tracing::warn!("module '{}' not found in the exam schedule", code);
                self.missing.push(code.to_string());
            }
            return;
        }

        for row in schedule.rows_for(code) {
            match CalendarEvent::from_row(code, row) {
                Ok(event) => {
                    tracing::info!(
                        "adding event for module '{}': date={} start={} end={} duration={}",
                        code,
                        row.date,
                        row.start,
                        row.end,
                        format_duration(event.duration())
                    );
                    self.events.push(event);
                }
                Err(err) => {
                    tracing::warn!(
                        "unable to compute duration for module '{}', skipping: {}",
                        code,
                        err
                    );
                    tracing::warn!("row with problematic duration calculation: {:?}", row);
                    self.skipped_rows += 1;
                }
            }
        }
    }

    /// Add every event for each requested module code, in request order.
    pub fn add_modules<I, S>(&mut self, schedule: &ExamSchedule, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for code in codes {
            self.add_module(schedule, code.as_ref());
        }
    }

    /// Requested codes that were not found, first occurrence only.
    pub fn missing_modules(&self) -> &[String] {
        &self.missing
    }

    /// Rows dropped because their date or time cells did not parse.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn finish(self) -> ExamCalendar {
        self.events.into_iter().collect()
    }
}
