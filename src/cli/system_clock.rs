use chrono::{DateTime, Local, NaiveDate, Utc};

use cashflow_core::Clock;

/// Real-time clock backed by the system time source; "today" is the local calendar day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
