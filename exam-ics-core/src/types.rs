use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;

/// One exam record as loaded from the schedule spreadsheet.
///
/// Date and time cells stay raw text here; they are only parsed when an
/// event is built from the row, so a malformed cell costs exactly that row
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleRow {
    /// Module code keying the exam
    #[serde(rename = "Module", default)]
    pub module: String,
    /// Sub-exam identifier, loaded but not used downstream
    #[serde(rename = "Paper", default)]
    pub paper: String,
    /// Exam date text
    #[serde(rename = "Date", default)]
    pub date: String,
    /// Start time-of-day text
    #[serde(rename = "Start", default)]
    pub start: String,
    /// End time-of-day text
    #[serde(rename = "End", default)]
    pub end: String,
}

/// A single time-boxed record destined for the output calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Event title, `Exam: {module code}`
    pub summary: String,
    /// Exam date combined with the start time (floating local time)
    pub start: NaiveDateTime,
    /// Exam date combined with the end time (floating local time)
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    /// Elapsed time between end and start.
    ///
    /// Negative when the schedule lists the end before the start; such
    /// rows still produce events.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// The calendar document: every event accumulated during one run, in
/// construction order. Events are never removed once added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamCalendar {
    events: Vec<CalendarEvent>,
}

impl ExamCalendar {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the document.
    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// All events in construction order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<CalendarEvent> for ExamCalendar {
    fn from_iter<I: IntoIterator<Item = CalendarEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

/// ICS generation options
#[derive(Debug, Clone)]
pub struct IcsOptions {
    /// Calendar display name (X-WR-CALNAME); omitted when `None`
    pub calendar_name: Option<String>,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            calendar_name: Some("Exam Schedule".to_string()),
        }
    }
}
