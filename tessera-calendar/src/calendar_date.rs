//! Calendar value types and the bounded date arithmetic the header needs.
//!
//! ## Usage
//!
//! Use [`CalendarDate`] as the value driving a calendar header, and
//! [`YearMonth`] when only the displayed month matters.
use std::time::{SystemTime, UNIX_EPOCH};

/// Which unit the header's selectors and navigation operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarMode {
    /// Month view: a month selector is shown and navigation steps by month.
    #[default]
    Month,
    /// Year view: no month selector, navigation steps by year.
    Year,
}

/// A calendar date expressed as year, month, and day.
///
/// Months are 1-12 and days are 1-based. The type is `Copy`; every derivation
/// returns a new value, so a date handed to a component is never mutated in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the year/month pair of this date.
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Returns the current date in UTC.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let days = (duration.as_secs() / 86_400) as i64;
        let (year, month, day) = civil_from_days(days);
        CalendarDate::new(year, month, day)
            .unwrap_or_else(|| CalendarDate::new_unchecked(1970, 1, 1))
    }

    /// Returns this date with the year replaced.
    ///
    /// The day is clamped to the length of the month in the target year, so
    /// February 29 moved to a common year becomes February 28.
    pub fn with_year(&self, year: i32) -> Self {
        let day = self.day.min(days_in_month(year, self.month));
        Self {
            year,
            month: self.month,
            day,
        }
    }

    /// Returns this date with the month (1-12) replaced.
    ///
    /// Out-of-range months are clamped into 1-12 and the day is clamped to
    /// the target month's length.
    pub fn with_month(&self, month: u8) -> Self {
        let month = month.clamp(1, 12);
        let day = self.day.min(days_in_month(self.year, month));
        Self {
            year: self.year,
            month,
            day,
        }
    }

    /// Returns this date shifted by whole months, rolling the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let shifted = self.year_month().add_months(delta);
        let day = self.day.min(days_in_month(shifted.year, shifted.month));
        Self {
            year: shifted.year,
            month: shifted.month,
            day,
        }
    }

    /// Returns this date shifted by whole years.
    pub fn add_years(&self, delta: i32) -> Self {
        self.with_year(self.year.saturating_add(delta))
    }

    /// Returns this date stepped by one unit of `mode` in `direction`
    /// (negative for previous, positive for next).
    pub fn step(&self, mode: CalendarMode, direction: i32) -> Self {
        match mode {
            CalendarMode::Month => self.add_months(direction),
            CalendarMode::Year => self.add_years(direction),
        }
    }

    fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// A year and month pair used for option derivation and month stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the month is valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_dates() {
        assert!(CalendarDate::new(2024, 0, 1).is_none());
        assert!(CalendarDate::new(2024, 13, 1).is_none());
        assert!(CalendarDate::new(2024, 2, 30).is_none());
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(2024, 2, 29).is_some());
    }

    #[test]
    fn month_step_rolls_year() {
        let date = CalendarDate::new(2024, 12, 15).unwrap();
        let next = date.step(CalendarMode::Month, 1);
        assert_eq!((next.year(), next.month(), next.day()), (2025, 1, 15));

        let date = CalendarDate::new(2024, 1, 15).unwrap();
        let previous = date.step(CalendarMode::Month, -1);
        assert_eq!(
            (previous.year(), previous.month(), previous.day()),
            (2023, 12, 15)
        );
    }

    #[test]
    fn month_step_clamps_day_to_target_month() {
        let date = CalendarDate::new(2024, 1, 31).unwrap();
        let next = date.add_months(1);
        assert_eq!((next.month(), next.day()), (2, 29));
    }

    #[test]
    fn year_step_changes_only_the_year() {
        let date = CalendarDate::new(2024, 3, 15).unwrap();
        let next = date.step(CalendarMode::Year, 1);
        assert_eq!((next.year(), next.month(), next.day()), (2025, 3, 15));
    }

    #[test]
    fn year_step_clamps_leap_day() {
        let date = CalendarDate::new(2024, 2, 29).unwrap();
        let next = date.add_years(1);
        assert_eq!((next.year(), next.month(), next.day()), (2025, 2, 28));
    }

    #[test]
    fn with_month_keeps_the_year() {
        let date = CalendarDate::new(2024, 3, 15).unwrap();
        let changed = date.with_month(11);
        assert_eq!(changed.year(), 2024);
        assert_eq!(changed.month(), 11);
    }

    #[test]
    fn year_month_arithmetic_wraps_both_ways() {
        let ym = YearMonth::new(2024, 1).unwrap();
        let back = ym.add_months(-13);
        assert_eq!((back.year(), back.month()), (2022, 12));
        let forward = ym.add_months(24);
        assert_eq!((forward.year(), forward.month()), (2026, 1));
    }

    #[test]
    fn civil_from_days_round_trips_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
    }
}
