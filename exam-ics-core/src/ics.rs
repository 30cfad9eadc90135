use std::{fs, path::Path};

use crate::{CalendarEvent, ExamCalendar, IcsOptions, Result};

/// Fixed name of the generated calendar file in the working directory.
pub const OUTPUT_FILE_NAME: &str = "exam_schedule.ics";

/// ICS calendar generator.
///
/// Output depends only on the events and options, so generating the same
/// calendar twice yields byte-identical text.
pub struct IcsGenerator {
    options: IcsOptions,
}

impl IcsGenerator {
    pub fn new(options: IcsOptions) -> Self {
        Self { options }
    }

    /// Render the calendar as ICS text.
    pub fn generate(&self, calendar: &ExamCalendar) -> String {
        let mut ics_content = String::new();

        ics_content.push_str("BEGIN:VCALENDAR\r\n");
        ics_content.push_str("VERSION:2.0\r\n");
        ics_content.push_str("PRODID:-//Exam ICS//Exam Schedule Calendar//EN\r\n");
        ics_content.push_str("CALSCALE:GREGORIAN\r\n");
        ics_content.push_str("METHOD:PUBLISH\r\n");

        if let Some(ref name) = self.options.calendar_name {
            ics_content.push_str(&format!("X-WR-CALNAME:{}\r\n", name));
        }

        for event in calendar.events() {
            self.add_exam_event(&mut ics_content, event);
        }

        ics_content.push_str("END:VCALENDAR\r\n");

        ics_content
    }

    /// Render the calendar and write it to `path`.
    pub fn write_to_path<P: AsRef<Path>>(&self, calendar: &ExamCalendar, path: P) -> Result<()> {
        fs::write(path, self.generate(calendar))?;
        Ok(())
    }

    /// Add a single exam event.
    fn add_exam_event(&self, ics_content: &mut String, event: &CalendarEvent) {
        let dtstart = event.start.format("%Y%m%dT%H%M%S").to_string();
        let dtend = event.end.format("%Y%m%dT%H%M%S").to_string();

        ics_content.push_str("BEGIN:VEVENT\r\n");
        ics_content.push_str(&format!("DTSTART:{}\r\n", dtstart));
        ics_content.push_str(&format!("DTEND:{}\r\n", dtend));
        ics_content.push_str(&format!(
            "SUMMARY:{}\r\n",
            self.escape_text(&event.summary)
        ));
        ics_content.push_str("END:VEVENT\r\n");
    }

    /// Escape ICS text values.
    fn escape_text(&self, text: &str) -> String {
        text.replace("\\", "\\\\")
            .replace("\n", "\\n")
            .replace("\r", "\\r")
            .replace(",", "\\,")
            .replace(";", "\\;")
    }
}

impl Default for IcsGenerator {
    fn default() -> Self {
        Self::new(IcsOptions::default())
    }
}

#[cfg(test)]
mod tests;
