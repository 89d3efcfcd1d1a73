use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TempusError;

/// Periodicity used to cut a time range into calendar-aligned slices.
///
/// The set is closed: each variant selects exactly one slicing strategy and
/// carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Every calendar day.
    Daily,
    /// Monday through Friday only.
    Workday,
    /// Saturday and Sunday only.
    Weekend,
    /// Calendar weeks, Monday through Sunday.
    Weekly,
    /// Calendar months.
    Monthly,
    /// Calendar years.
    Yearly,
}

impl PeriodKind {
    /// All period kinds in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Daily,
        Self::Workday,
        Self::Weekend,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
    ];

    /// Stable, lowercase identifier for logs, errors and serialized forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Workday => "workday",
            Self::Weekend => "weekend",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Human-readable label suitable for display layers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "every day",
            Self::Workday => "workdays",
            Self::Weekend => "weekends",
            Self::Weekly => "every week",
            Self::Monthly => "every month",
            Self::Yearly => "every year",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = TempusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(TempusError::unknown_period)
    }
}
