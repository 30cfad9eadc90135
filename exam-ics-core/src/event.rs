use chrono::{Duration, NaiveDate, NaiveTime};

use crate::{CalendarEvent, Result, ScheduleRow};

impl CalendarEvent {
    /// Build the calendar event for one schedule row.
    ///
    /// Date and time cells are parsed here, not at load time, so a bad cell
    /// only surfaces once the module is actually requested. Both times share
    /// the row's date; an end time earlier than the start is kept as-is.
    pub fn from_row(module_code: &str, row: &ScheduleRow) -> Result<Self> {
        let date = parse_date_text(&row.date)?;
        let start = date.and_time(parse_time_text(&row.start)?);
        let end = date.and_time(parse_time_text(&row.end)?);

        Ok(Self {
            summary: format!("Exam: {module_code}"),
            start,
            end,
        })
    }
}

fn parse_date_text(text: &str) -> std::result::Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
}

fn parse_time_text(text: &str) -> std::result::Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
}

/// Render a duration as `2h00m`, keeping the sign for negative spans.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    let sign = if total_minutes < 0 { "-" } else { "" };
    let minutes = total_minutes.abs();
    format!("{sign}{}h{:02}m", minutes / 60, minutes % 60)
}
