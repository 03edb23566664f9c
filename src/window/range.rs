use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::window::error::WindowError;

/// Which contacts a window is being chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// Passes that can still be booked: today up to the booking horizon.
    Upcoming,
    /// Contacts in any state, past or future.
    Any,
}

/// Date range of a contact query. `end` is exclusive (UTC midnight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ContactWindow {
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        self.end.and_time(NaiveTime::MIN).and_utc()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRules {
    pub today: NaiveDate,
    pub horizon_days: u64,
    pub history_days: u64,
}

impl WindowRules {
    fn horizon(&self) -> NaiveDate {
        self.today + Days::new(self.horizon_days)
    }

    pub fn default_start(&self, kind: WindowKind) -> NaiveDate {
        match kind {
            WindowKind::Upcoming => self.today,
            WindowKind::Any => self.today - Days::new(self.history_days),
        }
    }

    pub fn default_end(&self, _kind: WindowKind) -> NaiveDate {
        self.horizon()
    }

    pub fn check_start(&self, kind: WindowKind, start: NaiveDate) -> Result<(), WindowError> {
        if kind == WindowKind::Upcoming {
            if start < self.today {
                return Err(WindowError::StartInPast);
            }
            if start > self.horizon() {
                return Err(self.beyond_horizon());
            }
        }
        Ok(())
    }

    pub fn check_end(
        &self,
        kind: WindowKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ContactWindow, WindowError> {
        if end <= start {
            return Err(WindowError::EndNotAfterStart);
        }
        if kind == WindowKind::Upcoming && end > self.horizon() {
            return Err(self.beyond_horizon());
        }
        Ok(ContactWindow { start, end })
    }

    fn beyond_horizon(&self) -> WindowError {
        // the horizon day itself can be booked
        WindowError::BeyondHorizon(self.horizon_days as i64 + 1)
    }
}
