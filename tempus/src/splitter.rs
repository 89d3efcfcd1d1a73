use chrono::{DateTime, Utc};
use tempus_core::{PeriodKind, Slice, SplitterConfig, TempusError, TimeRange, Tz};

/// Splits time ranges into calendar-aligned slices in a reference time zone.
///
/// The splitter holds only its configuration; every call is independent, so a
/// single instance can be copied or shared across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodSplitter {
    pub(crate) cfg: SplitterConfig,
}

/// Builder for constructing a `PeriodSplitter` with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct PeriodSplitterBuilder {
    cfg: SplitterConfig,
    timezone_name: Option<String>,
}

impl PeriodSplitterBuilder {
    /// Create a new builder with defaults (`Asia/Shanghai` reference zone).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: SplitterConfig) -> Self {
        self.cfg = cfg;
        self.timezone_name = None;
        self
    }

    /// Compute period boundaries in `tz`.
    #[must_use]
    pub fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self.timezone_name = None;
        self
    }

    /// Compute period boundaries in the IANA zone `name`, resolved at [`build`](Self::build).
    #[must_use]
    pub fn timezone_name(mut self, name: impl Into<String>) -> Self {
        self.timezone_name = Some(name.into());
        self
    }

    /// Build the `PeriodSplitter`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a zone set via
    /// [`timezone_name`](Self::timezone_name) is not a known IANA zone.
    pub fn build(mut self) -> Result<PeriodSplitter, TempusError> {
        if let Some(name) = self.timezone_name.take() {
            self.cfg.timezone = name
                .trim()
                .parse::<Tz>()
                .map_err(|_| TempusError::unknown_timezone(&name))?;
        }
        Ok(PeriodSplitter { cfg: self.cfg })
    }
}

impl PeriodSplitter {
    /// Splitter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a new `PeriodSplitter`.
    ///
    /// ```rust
    /// use tempus::PeriodSplitter;
    ///
    /// let splitter = PeriodSplitter::builder()
    ///     .timezone_name("Europe/Rome")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(splitter.timezone(), chrono_tz::Europe::Rome);
    /// ```
    #[must_use]
    pub fn builder() -> PeriodSplitterBuilder {
        PeriodSplitterBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.cfg
    }

    /// Zone in which period boundaries are computed.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.cfg.timezone
    }

    /// Split `range` into slices of the given `kind`.
    ///
    /// Daily, workday, weekend and weekly slices lie fully inside `range`;
    /// partial periods at either edge are dropped. Monthly slices cover every
    /// month the range touches, the last one clipped to `range.end`. Yearly
    /// slices cover whole years inside the range only.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a period boundary is not representable.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tempus::split",
            skip(self, range),
            fields(tz = %self.cfg.timezone, start = %range.start, end = %range.end),
        )
    )]
    pub fn split(&self, kind: PeriodKind, range: TimeRange) -> Result<Vec<Slice>, TempusError> {
        tempus_core::split(kind, range, self.cfg.timezone)
    }

    /// Split a raw `[start, end]` pair of epoch milliseconds.
    ///
    /// # Errors
    /// Returns `InvalidArgument("time range format error")` when `range` has
    /// fewer than two elements or holds unrepresentable values.
    pub fn split_millis(
        &self,
        kind: PeriodKind,
        range: &[i64],
    ) -> Result<Vec<Slice>, TempusError> {
        self.split(kind, TimeRange::try_from_millis_slice(range)?)
    }

    /// Split a raw `[start, end]` pair of instants.
    ///
    /// # Errors
    /// Returns `InvalidArgument("time range format error")` when `range` has
    /// fewer than two elements.
    pub fn split_instants(
        &self,
        kind: PeriodKind,
        range: &[DateTime<Utc>],
    ) -> Result<Vec<Slice>, TempusError> {
        self.split(kind, TimeRange::try_from(range)?)
    }

    /// Split a raw millisecond range using a textual period selector such as
    /// `"weekly"`.
    ///
    /// The range is validated before the selector.
    ///
    /// # Errors
    /// - `InvalidArgument("time range format error")` for a malformed range.
    /// - `InvalidArgument("unknown time period")` for an unknown selector.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "tempus::split_named", skip(self, range), err)
    )]
    pub fn split_named(&self, kind: &str, range: &[i64]) -> Result<Vec<Slice>, TempusError> {
        let range = TimeRange::try_from_millis_slice(range)?;
        self.split(kind.parse()?, range)
    }
}
