use crate::model::{DayOffset, WINDOW_DAYS};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc, Weekday};

/// The moment a run started, fixed for the whole computation.
///
/// Every day-offset and the weekday alignment are derived from this single
/// reading so that they can never disagree about which day is today.
#[derive(Debug, Clone)]
pub struct Today<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl Today<Local> {
    pub fn local() -> Self {
        Self::new(Local::now())
    }
}

impl<Tz: TimeZone> Today<Tz> {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    pub fn now_utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }

    pub fn date(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn weekday(&self) -> Weekday {
        self.now.weekday()
    }

    pub fn alignment(&self) -> usize {
        weekday_alignment(self.weekday())
    }

    /// Day-offset of `timestamp`, with day boundaries taken in this clock's timezone.
    pub fn day_offset<Other: TimeZone>(&self, timestamp: &DateTime<Other>) -> DayOffset {
        let local = timestamp.with_timezone(&self.now.timezone());
        days_between(local.date_naive(), self.date())
    }
}

/// Count midnight crossings from `day` up to `today`, giving up past the window.
pub fn days_between(day: NaiveDate, today: NaiveDate) -> DayOffset {
    let mut cursor = day;
    let mut days = 0;

    while cursor < today {
        let Some(next) = cursor.succ_opt() else {
            return DayOffset::OutOfRange;
        };
        cursor = next;
        days += 1;
        if days > WINDOW_DAYS {
            return DayOffset::OutOfRange;
        }
    }

    DayOffset::Within(days)
}

/// Slots of padding that put today in its weekday row: Sunday 7 down to Saturday 1.
pub fn weekday_alignment(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}
