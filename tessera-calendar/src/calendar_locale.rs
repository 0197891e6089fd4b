//! Display strings for the calendar header.
//!
//! ## Usage
//!
//! Pass a [`CalendarLocale`] to the header to control its labels; start from
//! [`CalendarLocale::english`] or [`CalendarLocale::simplified_chinese`] and
//! override individual fields.
use derive_setters::Setters;
use tessera_ui::CallbackWith;

use crate::calendar_date::YearMonth;

/// Display strings required by the calendar header.
///
/// This is an explicit enumeration of every label the header renders, rather
/// than an open-ended map: the `today` button caption, the mode-switch
/// segment labels, the suffix appended to year options (the `年` case in
/// Chinese locales), and a month-name lookup. Month names are resolved per
/// [`YearMonth`] so locales whose month naming depends on the year keep
/// working.
#[derive(Clone, PartialEq, Setters)]
pub struct CalendarLocale {
    /// Caption of the "today" button.
    #[setters(into)]
    pub today: String,
    /// Label of the month segment in the mode switch.
    #[setters(into)]
    pub month: String,
    /// Label of the year segment in the mode switch.
    #[setters(into)]
    pub year: String,
    /// Suffix appended to each year option, e.g. `年`.
    #[setters(into)]
    pub year_suffix: String,
    /// Short month name lookup for a given year and month.
    #[setters(skip)]
    pub month_names: CallbackWith<YearMonth, String>,
}

impl CalendarLocale {
    /// English labels with `Jan`-style month names and no year suffix.
    pub fn english() -> Self {
        Self {
            today: "Today".to_string(),
            month: "Month".to_string(),
            year: "Year".to_string(),
            year_suffix: String::new(),
            month_names: CallbackWith::new(|month: YearMonth| {
                english_short_month(month.month()).to_string()
            }),
        }
    }

    /// Simplified Chinese labels, appending `年` to year options.
    pub fn simplified_chinese() -> Self {
        Self {
            today: "今天".to_string(),
            month: "月".to_string(),
            year: "年".to_string(),
            year_suffix: "年".to_string(),
            month_names: CallbackWith::new(|month: YearMonth| {
                format!("{}月", month.month())
            }),
        }
    }

    /// Sets the month-name lookup.
    pub fn month_names(mut self, month_names: impl Into<CallbackWith<YearMonth, String>>) -> Self {
        self.month_names = month_names.into();
        self
    }

    /// Returns the short month name for the given year and month.
    pub fn month_name(&self, month: YearMonth) -> String {
        self.month_names.call(month)
    }
}

impl Default for CalendarLocale {
    fn default() -> Self {
        Self::english()
    }
}

fn english_short_month(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_locale_has_no_year_suffix() {
        let locale = CalendarLocale::english();
        assert!(locale.year_suffix.is_empty());
        let march = YearMonth::new(2024, 3).unwrap();
        assert_eq!(locale.month_name(march), "Mar");
    }

    #[test]
    fn chinese_locale_appends_year_suffix() {
        let locale = CalendarLocale::simplified_chinese();
        assert_eq!(locale.year_suffix, "年");
        let january = YearMonth::new(2024, 1).unwrap();
        assert_eq!(locale.month_name(january), "1月");
    }

    #[test]
    fn month_names_can_depend_on_the_year() {
        let locale = CalendarLocale::english().month_names(|month: YearMonth| {
            format!("{}/{}", month.year(), month.month())
        });
        let june = YearMonth::new(2025, 6).unwrap();
        assert_eq!(locale.month_name(june), "2025/6");
    }
}
