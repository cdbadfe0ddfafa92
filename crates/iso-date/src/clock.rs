//! Sources of the current instant and of the local UTC offset.
//!
//! Both are traits so a schema can run against a [`FrozenClock`] in tests instead of the
//! process-wide system clock.

use chrono::{Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Reads the current wall-clock time.
pub trait Clock: Send + Sync + 'static {
    /// The current time in UTC.
    fn now_utc(&self) -> NaiveDateTime;

    /// The current local wall-clock time, without any offset attached.
    fn now_local(&self) -> NaiveDateTime;
}

/// Reads the UTC offset of the local timezone.
pub trait OffsetProvider: Send + Sync + 'static {
    /// The standard-time offset of the local timezone, ignoring daylight saving.
    fn standard_offset(&self) -> FixedOffset;

    /// The daylight-saving offset of the local timezone, whatever the date. Equal to the
    /// standard offset where daylight saving is not observed.
    fn daylight_offset(&self) -> FixedOffset;

    /// The offset in effect right now, daylight saving included.
    fn current_offset(&self) -> FixedOffset;
}

/// The operating system clock and timezone database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl OffsetProvider for SystemClock {
    fn standard_offset(&self) -> FixedOffset {
        seasonal_offsets(&Local, Local::now().year()).standard
    }

    fn daylight_offset(&self) -> FixedOffset {
        seasonal_offsets(&Local, Local::now().year()).daylight
    }

    fn current_offset(&self) -> FixedOffset {
        Local::now().offset().fix()
    }
}

struct SeasonalOffsets {
    standard: FixedOffset,
    daylight: FixedOffset,
}

/// Daylight saving always moves clocks forward, so whichever of January 1st and July 1st has
/// the smaller offset is on standard time and the other on daylight time, in either hemisphere.
fn seasonal_offsets<Tz: TimeZone>(timezone: &Tz, year: i32) -> SeasonalOffsets {
    let [january, july] = [1, 7].map(|month| {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| timezone.offset_from_utc_date(&date).fix())
            .unwrap_or_else(|| Utc.fix())
    });

    let (standard, daylight) = if january.local_minus_utc() <= july.local_minus_utc() {
        (january, july)
    } else {
        (july, january)
    };

    SeasonalOffsets { standard, daylight }
}

/// A clock stuck at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock {
    utc: NaiveDateTime,
    local: NaiveDateTime,
    standard_offset: FixedOffset,
    daylight_offset: FixedOffset,
    current_offset: FixedOffset,
}

impl FrozenClock {
    /// Freezes UTC and local time independently. `offset` is reported as the standard, the
    /// daylight and the current offset until told otherwise.
    pub fn new(utc: NaiveDateTime, local: NaiveDateTime, offset: FixedOffset) -> Self {
        Self {
            utc,
            local,
            standard_offset: offset,
            daylight_offset: offset,
            current_offset: offset,
        }
    }

    /// A clock where local time is UTC.
    pub fn utc(instant: NaiveDateTime) -> Self {
        Self::new(instant, instant, Utc.fix())
    }

    pub fn with_daylight_offset(mut self, offset: FixedOffset) -> Self {
        self.daylight_offset = offset;
        self
    }

    pub fn with_current_offset(mut self, offset: FixedOffset) -> Self {
        self.current_offset = offset;
        self
    }
}

impl Clock for FrozenClock {
    fn now_utc(&self) -> NaiveDateTime {
        self.utc
    }

    fn now_local(&self) -> NaiveDateTime {
        self.local
    }
}

impl OffsetProvider for FrozenClock {
    fn standard_offset(&self) -> FixedOffset {
        self.standard_offset
    }

    fn daylight_offset(&self) -> FixedOffset {
        self.daylight_offset
    }

    fn current_offset(&self) -> FixedOffset {
        self.current_offset
    }
}

#[cfg(test)]
mod tests {
    use chrono::LocalResult;

    use super::*;

    fn hours(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    /// One offset from April to September, another for the rest of the year.
    #[derive(Debug, Clone)]
    struct TwoSeasons {
        january: FixedOffset,
        july: FixedOffset,
    }

    impl TwoSeasons {
        fn on(&self, date: &NaiveDate) -> FixedOffset {
            if (4..=9).contains(&date.month()) {
                self.july
            } else {
                self.january
            }
        }
    }

    impl TimeZone for TwoSeasons {
        type Offset = FixedOffset;

        fn from_offset(offset: &FixedOffset) -> Self {
            Self {
                january: *offset,
                july: *offset,
            }
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(self.on(local))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::Single(self.on(&local.date()))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.on(utc)
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            self.on(&utc.date())
        }
    }

    #[test]
    fn fixed_timezone_has_a_single_offset() {
        let offsets = seasonal_offsets(&hours(-4), 2019);
        assert_eq!(offsets.standard, hours(-4));
        assert_eq!(offsets.daylight, hours(-4));

        let offsets = seasonal_offsets(&Utc, 2019);
        assert_eq!(offsets.standard, hours(0));
        assert_eq!(offsets.daylight, hours(0));
    }

    #[test]
    fn northern_hemisphere_saves_daylight_in_july() {
        let new_york = TwoSeasons {
            january: hours(-5),
            july: hours(-4),
        };

        let offsets = seasonal_offsets(&new_york, 2019);

        assert_eq!(offsets.standard, hours(-5));
        assert_eq!(offsets.daylight, hours(-4));
    }

    #[test]
    fn southern_hemisphere_saves_daylight_in_january() {
        let sydney = TwoSeasons {
            january: hours(11),
            july: hours(10),
        };

        let offsets = seasonal_offsets(&sydney, 2019);

        assert_eq!(offsets.standard, hours(10));
        assert_eq!(offsets.daylight, hours(11));
    }

    #[test]
    fn system_offsets_are_ordered() {
        let clock = SystemClock;
        let standard = clock.standard_offset().local_minus_utc();

        assert!(standard <= clock.current_offset().local_minus_utc());
        assert!(clock.current_offset().local_minus_utc() <= clock.daylight_offset().local_minus_utc());
    }

    #[test]
    fn frozen_clock_reports_what_it_was_given() {
        let utc = "2019-09-04T13:49:12.585158".parse().unwrap();
        let local = "2019-09-04T09:49:12.585158".parse().unwrap();
        let clock = FrozenClock::new(utc, local, hours(-5))
            .with_daylight_offset(hours(-4))
            .with_current_offset(hours(-4));

        assert_eq!(clock.now_utc(), utc);
        assert_eq!(clock.now_local(), local);
        assert_eq!(clock.standard_offset(), hours(-5));
        assert_eq!(clock.daylight_offset(), hours(-4));
        assert_eq!(clock.current_offset(), hours(-4));
    }

    #[test]
    fn frozen_utc_clock_has_zero_offset() {
        let instant = "2019-09-04T13:49:12".parse().unwrap();
        let clock = FrozenClock::utc(instant);

        assert_eq!(clock.now_local(), instant);
        assert_eq!(clock.standard_offset(), hours(0));
        assert_eq!(clock.daylight_offset(), hours(0));
    }
}
