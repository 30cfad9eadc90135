//! Exam ICS Core Library
//!
//! This library provides core functionality for turning an exam schedule
//! spreadsheet export into an ICS calendar file: loading the tabular
//! schedule, filtering rows by requested module codes, building calendar
//! events, and serializing the final calendar document.

pub mod error;
pub mod event;
pub mod ics;
pub mod pipeline;
pub mod schedule;
pub mod types;

// Re-export core types and error handling
pub use error::{Error, Result};
pub use types::*;

/// Commonly used items
pub mod prelude {
    pub use crate::{event::*, ics::*, pipeline::*, schedule::*, types::*};
}
