//! Month arithmetic for payoff dates.
//!
//! Payoff dates are whole-month offsets from the start date. These helpers do
//! the calendar arithmetic directly instead of going through `jiff::Span`, and
//! clamp the day to the end of shorter months (Jan 31 + 1 month = Feb 28/29).

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month without constructing a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Add `n` whole months to a date, clamping the day to the target month's length.
///
/// Saturates at `Date::MAX` rather than overflowing the supported year range.
pub fn add_months(d: Date, n: u32) -> Date {
    let total = i64::from(d.year()) * 12 + i64::from(d.month() - 1) + i64::from(n);
    let year = total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as i8;

    if year > i64::from(Date::MAX.year()) {
        return Date::MAX;
    }
    let year = year as i16;

    let day = d.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}
