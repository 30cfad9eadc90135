use std::{fs, io::Read, path::Path};

use crate::{Error, Result, ScheduleRow};

/// Lines preceding the real header row in the source file.
///
/// Exports from the registry carry a two-line preamble; the column header
/// sits on line 3 and data rows follow it.
pub const HEADER_LINE_OFFSET: usize = 2;

/// Columns the loader requires, by exact header name.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Module", "Paper", "Date", "Start", "End"];

/// The loaded exam schedule: every data row from the source file, in file
/// order.
#[derive(Debug, Clone, Default)]
pub struct ExamSchedule {
    rows: Vec<ScheduleRow>,
}

impl ExamSchedule {
    /// Load a schedule from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Load a schedule from raw bytes.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let cursor = std::io::Cursor::new(bytes.as_ref());
        Self::from_reader(cursor)
    }

    /// Load a schedule from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self> {
        let body = skip_preamble(text);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !headers.iter().any(|header| header == *name))
            .collect();
        if !missing.is_empty() {
            return Err(Error::DataFormat(format!(
                "required column(s) missing from header: {}",
                missing.join(", ")
            )));
        }

        let mut rows = Vec::new();
        for record in reader.deserialize::<ScheduleRow>() {
            rows.push(record?);
        }

        Ok(Self { rows })
    }

    /// All rows in load order.
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Whether any row carries exactly this module code.
    ///
    /// Matching is case-sensitive with no trimming, so `" CS102"` and
    /// `"CS102"` are different codes.
    pub fn has_module(&self, code: &str) -> bool {
        self.rows.iter().any(|row| row.module == code)
    }

    /// All rows for a module code, in load order.
    pub fn rows_for<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a ScheduleRow> + 'a {
        self.rows.iter().filter(move |row| row.module == code)
    }
}

fn skip_preamble(text: &str) -> &str {
    let mut rest = text;
    for _ in 0..HEADER_LINE_OFFSET {
        match rest.split_once('\n') {
            Some((_, tail)) => rest = tail,
            None => return "",
        }
    }
    rest
}
