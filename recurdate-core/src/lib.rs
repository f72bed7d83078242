//! Core types for recurdate.
//!
//! This crate turns a declarative recurrence rule into concrete calendar dates:
//! - `spec` holds the rule (`RecurrenceSpec`)
//! - `recurrence` expands it into an `OccurrenceSeries`
//! - `summary` and `prompt` describe a rule in words
//! - `suggest` defines the injected text-model capability

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod prompt;
pub mod recurrence;
pub mod spec;
pub mod suggest;
pub mod summary;

pub use constants::{MAX_OCCURRENCES, MAX_SCAN_DAYS};
pub use error::{RecurError, RecurResult};
pub use recurrence::{OccurrenceSeries, expand};
pub use spec::{DailyStep, Frequency, MonthlyMode, RecurrenceSpec};
