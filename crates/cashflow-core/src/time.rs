use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Clock abstracts access to the current timestamp so day offsets remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current local calendar date. Defaults to `now()` shifted into local time.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// Clock pinned to a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.today.and_time(NaiveTime::default()))
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
