//! Re-export of foundational types from `tempus-types`.
// Consolidated re-exports so downstream crates can depend on `tempus-core` only

pub use tempus_types::range::{Slice, TimeRange};
pub use tempus_types::{DEFAULT_TIMEZONE, PeriodKind, SplitterConfig, TempusError};

pub use chrono_tz::Tz;
