//! Where leaderboard dates come from.

use chrono::NaiveDate;

/// Supplies "today" for leaderboard entries.
pub trait DateSource {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date from the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDate;

impl DateSource for SystemDate {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always the same date. Useful for tests and replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
