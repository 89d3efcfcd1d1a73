//! Tempus value types: period kinds, time ranges, slices, configuration and errors.
#![warn(missing_docs)]

mod config;
/// Error type shared across the workspace.
pub mod error;
mod period;
pub mod range;

pub use config::{DEFAULT_TIMEZONE, SplitterConfig};
pub use error::TempusError;
pub use period::PeriodKind;
pub use range::{Slice, TimeRange};
