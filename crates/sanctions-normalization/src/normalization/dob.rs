//! Date-of-birth parsing with partial-precision fallback.
//!
//! The raw list writes dates as `DD/MM/YYYY` and marks unknown parts with a
//! zero placeholder: `00/06/1980` means "some day in June 1980" and
//! `00/00/1980` means "some day in 1980". Partial dates resolve to the first
//! day of the known period and carry a precision label saying so.

use chrono::NaiveDate;
use sanctions_model::{DobPrecision, ParsedDob};

use crate::config::YearWindow;

/// Splits `D/M/YYYY` into its numeric parts.
///
/// Day and month take one or two digits, the year exactly four. Anything else
/// (extra separators, signs, spaces inside) is rejected.
fn split_dmy(value: &str) -> Option<(u32, u32, i32)> {
    let mut parts = value.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let short_digits = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !short_digits(day) || !short_digits(month) {
        return None;
    }
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((day.parse().ok()?, month.parse().ok()?, year.parse().ok()?))
}

fn full_date(value: &str, years: YearWindow) -> Option<NaiveDate> {
    if value.starts_with("00/") {
        return None;
    }
    let (day, month, year) = split_dmy(value)?;
    if !years.contains(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_year(value: &str, years: YearWindow) -> Option<NaiveDate> {
    if !value.starts_with("00/") {
        return None;
    }
    let (_, month, year) = split_dmy(value)?;
    if !(1..=12).contains(&month) || !years.contains(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn year_only(value: &str, years: YearWindow) -> Option<NaiveDate> {
    let year_text = value.strip_prefix("00/00/")?;
    if year_text.len() != 4 || !year_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_text.parse().ok()?;
    if !years.contains(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Parses a raw date of birth.
///
/// Rules are tried in order and the first success wins:
///
/// 1. null, blank or `nan` (any case) gives [`DobPrecision::Missing`]
/// 2. a calendar-valid `DD/MM/YYYY` not starting with `00/` gives
///    [`DobPrecision::FullDate`]
/// 3. `00/MM/YYYY` gives the first of that month, [`DobPrecision::MonthYearOnly`]
/// 4. `00/00/YYYY` gives January 1, [`DobPrecision::YearOnly`]
/// 5. anything else gives [`DobPrecision::UnknownFailed`]
///
/// Every rule requires the year to lie inside `years`. Invalid dates fall
/// through to the next rule; this function never fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sanctions_model::DobPrecision;
/// use sanctions_normalization::{YearWindow, parse_dob};
///
/// let years = YearWindow::new(1900, 2024);
/// let dob = parse_dob(Some("00/06/1980"), years);
/// assert_eq!(dob.date, NaiveDate::from_ymd_opt(1980, 6, 1));
/// assert_eq!(dob.precision, DobPrecision::MonthYearOnly);
/// ```
pub fn parse_dob(raw: Option<&str>, years: YearWindow) -> ParsedDob {
    let Some(raw) = raw else {
        return ParsedDob::missing();
    };
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return ParsedDob::missing();
    }

    let attempts: [(fn(&str, YearWindow) -> Option<NaiveDate>, DobPrecision); 3] = [
        (full_date, DobPrecision::FullDate),
        (month_year, DobPrecision::MonthYearOnly),
        (year_only, DobPrecision::YearOnly),
    ];
    for (parse, precision) in attempts {
        if let Some(date) = parse(value, years) {
            return ParsedDob {
                date: Some(date),
                precision,
            };
        }
    }
    ParsedDob::failed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> YearWindow {
        YearWindow::new(1900, 2024)
    }

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_full_date() {
        let dob = parse_dob(Some("15/06/1980"), years());
        assert_eq!(dob.date, ymd(1980, 6, 15));
        assert_eq!(dob.precision, DobPrecision::FullDate);
    }

    #[test]
    fn test_full_date_without_padding() {
        let dob = parse_dob(Some("5/6/1980"), years());
        assert_eq!(dob.date, ymd(1980, 6, 5));
        assert_eq!(dob.precision, DobPrecision::FullDate);
    }

    #[test]
    fn test_month_year_only() {
        let dob = parse_dob(Some("00/06/1980"), years());
        assert_eq!(dob.date, ymd(1980, 6, 1));
        assert_eq!(dob.precision, DobPrecision::MonthYearOnly);
    }

    #[test]
    fn test_year_only() {
        let dob = parse_dob(Some("00/00/1980"), years());
        assert_eq!(dob.date, ymd(1980, 1, 1));
        assert_eq!(dob.precision, DobPrecision::YearOnly);
    }

    #[test]
    fn test_missing() {
        assert_eq!(parse_dob(None, years()), ParsedDob::missing());
        assert_eq!(parse_dob(Some(""), years()), ParsedDob::missing());
        assert_eq!(parse_dob(Some("  "), years()), ParsedDob::missing());
        assert_eq!(parse_dob(Some("NaN"), years()), ParsedDob::missing());
    }

    #[test]
    fn test_invalid_calendar_date_fails() {
        assert_eq!(parse_dob(Some("31/02/1980"), years()), ParsedDob::failed());
    }

    #[test]
    fn test_year_outside_window_fails() {
        assert_eq!(parse_dob(Some("01/01/1899"), years()), ParsedDob::failed());
        assert_eq!(parse_dob(Some("00/03/2025"), years()), ParsedDob::failed());
        assert_eq!(parse_dob(Some("00/00/1850"), years()), ParsedDob::failed());
    }

    #[test]
    fn test_bad_month_placeholder_fails() {
        assert_eq!(parse_dob(Some("00/13/1980"), years()), ParsedDob::failed());
    }

    #[test]
    fn test_free_text_fails() {
        assert_eq!(parse_dob(Some("circa 1970"), years()), ParsedDob::failed());
        assert_eq!(parse_dob(Some("1980-06-15"), years()), ParsedDob::failed());
        assert_eq!(parse_dob(Some("15/06/80"), years()), ParsedDob::failed());
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let dob = parse_dob(Some(" 15/06/1980 "), years());
        assert_eq!(dob.precision, DobPrecision::FullDate);
    }
}
