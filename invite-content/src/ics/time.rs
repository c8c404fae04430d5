//! DATE, DATE-TIME and DURATION values.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{CalendarDateTime, DatePerhapsTime};

/// A point in time as written in an ICS property.
///
/// The variants keep the distinction RFC 5545 makes so that display code can
/// decide how to place the value on a wall clock.
#[derive(Debug, Clone, PartialEq)]
pub enum EventTime {
    /// All-day value (`VALUE=DATE`)
    Date(NaiveDate),
    /// `20150612T150000Z`
    DateTimeUtc(DateTime<Utc>),
    /// `20150612T150000`, local to whoever reads it
    DateTimeFloating(NaiveDateTime),
    /// `DTSTART;TZID=Europe/Paris:20150612T150000`
    DateTimeZoned { datetime: NaiveDateTime, tzid: String },
}

impl From<DatePerhapsTime> for EventTime {
    fn from(dpt: DatePerhapsTime) -> Self {
        match dpt {
            DatePerhapsTime::Date(d) => EventTime::Date(d),
            DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
                CalendarDateTime::Utc(dt) => EventTime::DateTimeUtc(dt),
                CalendarDateTime::Floating(naive) => EventTime::DateTimeFloating(naive),
                CalendarDateTime::WithTimezone { date_time, tzid } => EventTime::DateTimeZoned {
                    datetime: date_time,
                    tzid,
                },
            },
        }
    }
}

impl EventTime {
    /// Shift by `duration`, keeping the value's form.
    ///
    /// An all-day value stays all-day only when the duration is a whole
    /// number of days; otherwise it becomes a floating date-time from midnight.
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        match self {
            EventTime::Date(d) => {
                if duration.num_seconds() % 86_400 == 0 {
                    d.checked_add_signed(duration).map(EventTime::Date)
                } else {
                    d.and_time(NaiveTime::MIN)
                        .checked_add_signed(duration)
                        .map(EventTime::DateTimeFloating)
                }
            }
            EventTime::DateTimeUtc(dt) => dt.checked_add_signed(duration).map(EventTime::DateTimeUtc),
            EventTime::DateTimeFloating(dt) => dt
                .checked_add_signed(duration)
                .map(EventTime::DateTimeFloating),
            EventTime::DateTimeZoned { datetime, tzid } => datetime
                .checked_add_signed(duration)
                .map(|datetime| EventTime::DateTimeZoned {
                    datetime,
                    tzid: tzid.clone(),
                }),
        }
    }

    /// Wall-clock reading of this value.
    ///
    /// With a display zone, UTC and zoned values are converted into it and
    /// floating values are taken as already local to it. Without one, values
    /// are read as written (UTC as UTC, zoned values in their own zone).
    pub fn wall_clock(&self, display_zone: Option<Tz>) -> NaiveDateTime {
        match self {
            EventTime::Date(d) => d.and_time(NaiveTime::MIN),
            EventTime::DateTimeUtc(dt) => match display_zone {
                Some(tz) => dt.with_timezone(&tz).naive_local(),
                None => dt.naive_utc(),
            },
            EventTime::DateTimeFloating(dt) => *dt,
            EventTime::DateTimeZoned { datetime, tzid } => {
                let Some(display) = display_zone else {
                    return *datetime;
                };
                let Ok(source) = tzid.parse::<Tz>() else {
                    tracing::warn!(%tzid, "unknown TZID, showing wall-clock time as written");
                    return *datetime;
                };
                match source.from_local_datetime(datetime) {
                    LocalResult::Single(dt) => dt.with_timezone(&display).naive_local(),
                    LocalResult::Ambiguous(dt, _) => {
                        tracing::warn!(?datetime, %tzid, "ambiguous local time, picking earliest");
                        dt.with_timezone(&display).naive_local()
                    }
                    LocalResult::None => {
                        tracing::warn!(?datetime, %tzid, "invalid local time, falling back to floating");
                        *datetime
                    }
                }
            }
        }
    }
}

/// Parse an RFC 5545 DURATION value (`P1W`, `P1DT2H`, `-PT15M`).
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let duration = iso8601::duration(unsigned).ok()?;
    let std_duration: std::time::Duration = duration.into();
    let duration = Duration::from_std(std_duration).ok()?;

    Some(if negative { -duration } else { duration })
}
