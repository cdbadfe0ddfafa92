use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

use crate::{
    clock::{Clock, OffsetProvider, SystemClock},
    IsoDateArgs, IsoDateConfig, LocalOffset,
};

/// A wall-clock reading paired with the offset it is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant(DateTime<FixedOffset>);

impl Instant {
    /// Attaches `offset` to `wall_clock` as is, without converting between timezones.
    pub fn new(wall_clock: NaiveDateTime, offset: FixedOffset) -> Self {
        Self(DateTime::from_naive_utc_and_offset(wall_clock - offset, offset))
    }

    /// `YYYY-MM-DDTHH:MM:SS[.ffffff][±HH:MM]`. The fraction is always six digits and anything
    /// below a microsecond is dropped.
    pub fn render(&self, microseconds: bool, timezone: bool) -> String {
        let pattern = match (microseconds, timezone) {
            (true, true) => "%Y-%m-%dT%H:%M:%S%.6f%:z",
            (true, false) => "%Y-%m-%dT%H:%M:%S%.6f",
            (false, true) => "%Y-%m-%dT%H:%M:%S%:z",
            (false, false) => "%Y-%m-%dT%H:%M:%S",
        };

        self.0.format(pattern).to_string()
    }
}

/// Formats the current instant for `@isoDate`.
///
/// Cheap to clone, and meant to be shared through schema data:
///
/// ```no_run
/// # use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
/// # struct Query;
/// # #[Object] impl Query { async fn a(&self) -> i32 { 1 } }
/// let config = iso_date::IsoDateConfig::default();
/// let schema = Schema::build(Query, EmptyMutation, EmptySubscription)
///     .directive(iso_date::iso_date)
///     .data(iso_date::TimestampFormatter::system(&config))
///     .finish();
/// ```
#[derive(Clone)]
pub struct TimestampFormatter {
    clock: Arc<dyn Clock>,
    offsets: Arc<dyn OffsetProvider>,
    local_offset: LocalOffset,
    logger: Option<Arc<str>>,
}

static SYSTEM: LazyLock<TimestampFormatter> = LazyLock::new(TimestampFormatter::default);

impl TimestampFormatter {
    pub fn new(clock: impl Clock, offsets: impl OffsetProvider, config: &IsoDateConfig) -> Self {
        Self {
            clock: Arc::new(clock),
            offsets: Arc::new(offsets),
            local_offset: config.local_offset,
            logger: config.logger.as_deref().map(Arc::from),
        }
    }

    /// Reads the operating system clock and timezone.
    pub fn system(config: &IsoDateConfig) -> Self {
        Self::new(SystemClock, SystemClock, config)
    }

    /// The formatter registered as schema data, or a shared one reading the system clock.
    pub fn from_data(data: Option<&TimestampFormatter>) -> &TimestampFormatter {
        data.unwrap_or(&SYSTEM)
    }

    /// The `logger` name from the configuration.
    pub fn logger(&self) -> Option<&str> {
        self.logger.as_deref()
    }

    /// Captures the current instant, in UTC or in local wall-clock time.
    pub fn now(&self, utc: bool) -> Instant {
        if utc {
            return Instant::new(self.clock.now_utc(), Utc.fix());
        }

        let offset = match self.local_offset {
            LocalOffset::Standard => self.offsets.standard_offset(),
            LocalOffset::Daylight => self.offsets.daylight_offset(),
            LocalOffset::Current => self.offsets.current_offset(),
        };

        Instant::new(self.clock.now_local(), offset)
    }

    pub fn format(&self, args: IsoDateArgs) -> String {
        self.now(args.utc).render(args.microseconds, args.timezone)
    }
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::system(&IsoDateConfig::default())
    }
}

impl fmt::Debug for TimestampFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampFormatter")
            .field("local_offset", &self.local_offset)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
