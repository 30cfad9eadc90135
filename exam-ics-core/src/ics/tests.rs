use std::io::BufReader;

use chrono::{NaiveDate, NaiveTime};
use ical::parser::ical::{IcalParser, component::IcalEvent};

use super::*;

fn event(module: &str, date: (i32, u32, u32), start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
    let day = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    CalendarEvent {
        summary: format!("Exam: {module}"),
        start: day.and_time(NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap()),
        end: day.and_time(NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap()),
    }
}

fn sample_calendar() -> ExamCalendar {
    [
        event("CS101", (2024, 5, 1), (9, 0), (11, 0)),
        event("CS102", (2024, 5, 2), (13, 0), (14, 30)),
    ]
    .into_iter()
    .collect()
}

fn event_property<'a>(event: &'a IcalEvent, name: &str) -> Option<&'a str> {
    event
        .properties
        .iter()
        .find(|prop| prop.name.eq_ignore_ascii_case(name))
        .and_then(|prop| prop.value.as_deref())
}

#[test]
fn renders_one_vevent_per_event() {
    let ics = IcsGenerator::default().generate(&sample_calendar());

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert_eq!(ics.matches("END:VEVENT").count(), 2);
    assert!(ics.contains("SUMMARY:Exam: CS101\r\n"));
    assert!(ics.contains("DTSTART:20240501T090000\r\n"));
    assert!(ics.contains("DTEND:20240501T110000\r\n"));
    assert!(ics.contains("SUMMARY:Exam: CS102\r\n"));
    assert!(ics.contains("DTEND:20240502T143000\r\n"));
}

#[test]
fn events_keep_document_order() {
    let ics = IcsGenerator::default().generate(&sample_calendar());

    let first = ics.find("SUMMARY:Exam: CS101").unwrap();
    let second = ics.find("SUMMARY:Exam: CS102").unwrap();
    assert!(first < second);
}

#[test]
fn empty_calendar_is_still_valid() {
    let ics = IcsGenerator::default().generate(&ExamCalendar::new());

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert!(ics.contains("VERSION:2.0\r\n"));
    assert!(!ics.contains("BEGIN:VEVENT"));
}

#[test]
fn output_is_reproducible() {
    let calendar = sample_calendar();
    let first = IcsGenerator::default().generate(&calendar);
    let second = IcsGenerator::default().generate(&calendar);

    assert_eq!(first, second);
    assert!(!first.contains("DTSTAMP"));
    assert!(!first.contains("UID"));
}

#[test]
fn summary_text_is_escaped() {
    let mut event = event("CS101", (2024, 5, 1), (9, 0), (11, 0));
    event.summary = "Exam: CS101, resit; day 1".to_string();
    let calendar: ExamCalendar = [event].into_iter().collect();

    let ics = IcsGenerator::default().generate(&calendar);
    assert!(ics.contains("SUMMARY:Exam: CS101\\, resit\\; day 1\r\n"));
}

#[test]
fn calendar_name_follows_options() {
    let calendar = ExamCalendar::new();

    let default = IcsGenerator::default().generate(&calendar);
    assert!(default.contains("X-WR-CALNAME:Exam Schedule\r\n"));

    let named = IcsGenerator::new(IcsOptions {
        calendar_name: Some("Summer exams".to_string()),
    });
    assert!(
        named
            .generate(&calendar)
            .contains("X-WR-CALNAME:Summer exams\r\n")
    );

    let unnamed = IcsGenerator::new(IcsOptions {
        calendar_name: None,
    });
    assert!(!unnamed.generate(&calendar).contains("X-WR-CALNAME"));
}

#[test]
fn writes_calendar_file() {
    let calendar = sample_calendar();
    let generator = IcsGenerator::default();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    generator.write_to_path(&calendar, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, generator.generate(&calendar));
}

#[test]
fn write_failure_is_io_error() {
    let err = IcsGenerator::default()
        .write_to_path(&ExamCalendar::new(), "/nonexistent/dir/exam_schedule.ics")
        .unwrap_err();
    assert!(matches!(err, crate::Error::Io(_)));
}

#[test]
fn generated_output_parses_as_ical() {
    let ics = IcsGenerator::default().generate(&sample_calendar());

    let calendars = IcalParser::new(BufReader::new(ics.as_bytes()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(calendars.len(), 1);
    assert_eq!(calendars[0].events.len(), 2);
    assert_eq!(
        event_property(&calendars[0].events[0], "SUMMARY"),
        Some("Exam: CS101")
    );
    assert_eq!(
        event_property(&calendars[0].events[0], "DTSTART"),
        Some("20240501T090000")
    );
    assert_eq!(
        event_property(&calendars[0].events[1], "DTEND"),
        Some("20240502T143000")
    );
}
