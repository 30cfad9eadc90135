use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tabular input parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Duration computation failed: {0}")]
    DurationComputation(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
