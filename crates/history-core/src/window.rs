// File: crates/history-core/src/window.rs
// Summary: Optional [since, until] calendar-date window shared by scanning and reindexing.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Inclusive calendar-date bounds, interpreted in UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateWindow {
    /// Build a window; fails when both bounds are present and `until < since`.
    pub fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Result<Self> {
        let window = Self { since, until };
        window.validate()?;
        Ok(window)
    }

    pub const fn unbounded() -> Self {
        Self { since: None, until: None }
    }

    pub fn validate(&self) -> Result<()> {
        match (self.since, self.until) {
            (Some(since), Some(until)) => check_order(since, until),
            _ => Ok(()),
        }
    }

    /// `true` when `ts` falls on a day inside the window.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let day = ts.date_naive();
        self.since.map_or(true, |s| day >= s) && self.until.map_or(true, |u| day <= u)
    }

    /// Effective bounds: explicit bounds win, otherwise the observed ones.
    /// Fails with `InvalidWindow` when the result is inverted.
    pub fn resolve(&self, observed_min: NaiveDate, observed_max: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let since = self.since.unwrap_or(observed_min);
        let until = self.until.unwrap_or(observed_max);
        check_order(since, until)?;
        Ok((since, until))
    }
}

fn check_order(since: NaiveDate, until: NaiveDate) -> Result<()> {
    if until < since {
        Err(Error::InvalidWindow { since, until })
    } else {
        Ok(())
    }
}

/// 00:00 UTC on `date`.
pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// 00:00 UTC on the day after `date` (exclusive end of that day).
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    midnight(date.checked_add_days(Days::new(1)).unwrap_or(date))
}
