// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gregorian computus (Meeus/Jones/Butcher).
//
// Exact for any proleptic Gregorian year chrono can represent. The three
// movable national holidays are fixed offsets from this one date, so this
// function is the single source of truth for all of them.

use chrono::NaiveDate;

/// Date of Western Easter Sunday for the given year.
pub fn easter(year: i32) -> NaiveDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // month is always 3 or 4 and day 1..=31, so construction cannot fail
    // within chrono's year range.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus yields a valid March or April date")
}
