//! tempus-core
//!
//! Calendar arithmetic and period slicing shared across the tempus ecosystem.
//!
//! - `types`: period kinds, time ranges, slices, configuration and errors.
//! - `calendar`: day/week/month/year boundaries in a reference time zone.
//! - `split`: the six slicing strategies and the `split` dispatcher.
//!
//! Everything here is pure and synchronous; no state is shared between calls.
#![warn(missing_docs)]

pub mod calendar;
pub mod split;
pub mod types;

pub use split::{
    split, split_daily, split_monthly, split_weekends, split_weekly, split_workdays, split_yearly,
};
pub use types::*;
