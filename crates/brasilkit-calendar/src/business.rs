// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Business-day counting over the national holiday calendar.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::holidays::is_holiday;

/// Number of business days in the inclusive range `[start, end]`.
///
/// The bounds are swap-normalized, so argument order does not matter. A day
/// counts when it falls Monday through Friday and — unless
/// `include_holidays` is set — is not a national holiday. The holiday test
/// rebuilds the year set for every day it inspects; fine for ranges spanning
/// a handful of years, which is what this is for.
pub fn business_days_between(start: NaiveDate, end: NaiveDate, include_holidays: bool) -> u32 {
    let (mut day, last) = if start <= end { (start, end) } else { (end, start) };

    let mut count = 0;
    while day <= last {
        if is_weekday(day) && (include_holidays || !is_holiday(day)) {
            count += 1;
        }
        day = day + Duration::days(1);
    }
    count
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_ordinary_monday_counts_once() {
        // 2023-01-02 is a Monday and not a holiday.
        assert_eq!(business_days_between(date(2023, 1, 2), date(2023, 1, 2), false), 1);
    }

    #[test]
    fn new_year_sunday_counts_zero() {
        // 2023-01-01 is both a Sunday and Ano Novo.
        assert_eq!(business_days_between(date(2023, 1, 1), date(2023, 1, 1), false), 0);
        // Even counting holidays, a Sunday is never a business day.
        assert_eq!(business_days_between(date(2023, 1, 1), date(2023, 1, 1), true), 0);
    }

    #[test]
    fn weekend_only_range_counts_zero() {
        assert_eq!(business_days_between(date(2023, 1, 7), date(2023, 1, 8), false), 0);
    }

    #[test]
    fn february_2023_excludes_carnaval() {
        // 20 weekdays, one of them Carnaval (Tue Feb 21).
        assert_eq!(business_days_between(date(2023, 2, 1), date(2023, 2, 28), false), 19);
        assert_eq!(business_days_between(date(2023, 2, 1), date(2023, 2, 28), true), 20);
    }

    #[test]
    fn good_friday_week_2023() {
        // Mon Apr 3 .. Sun Apr 9: five weekdays minus Sexta-feira Santa.
        assert_eq!(business_days_between(date(2023, 4, 3), date(2023, 4, 9), false), 4);
    }

    #[test]
    fn swapped_bounds_give_the_same_count() {
        assert_eq!(
            business_days_between(date(2023, 2, 28), date(2023, 2, 1), false),
            business_days_between(date(2023, 2, 1), date(2023, 2, 28), false)
        );
    }

    #[test]
    fn full_year_2023() {
        // 260 weekdays, 10 of which are weekday holidays (Ano Novo fell on
        // a Sunday that year).
        assert_eq!(business_days_between(date(2023, 1, 1), date(2023, 12, 31), false), 250);
        assert_eq!(business_days_between(date(2023, 1, 1), date(2023, 12, 31), true), 260);
    }

    #[test]
    fn range_spanning_a_year_boundary() {
        // Fri Dec 29 2023 .. Tue Jan 2 2024: Dec 29 and Jan 2 are business
        // days, Jan 1 is Ano Novo (Monday).
        assert_eq!(business_days_between(date(2023, 12, 29), date(2024, 1, 2), false), 2);
        assert_eq!(business_days_between(date(2023, 12, 29), date(2024, 1, 2), true), 3);
    }
}
