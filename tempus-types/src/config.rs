//! Configuration shared by the splitter facade and the core algorithms.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Reference zone used when no other zone is configured (UTC+8, no DST).
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Shanghai;

/// Global configuration for a `PeriodSplitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Zone in which day, week, month and year boundaries are computed.
    ///
    /// Serialized as its IANA name, e.g. `"Asia/Shanghai"`.
    pub timezone: Tz,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
        }
    }
}
