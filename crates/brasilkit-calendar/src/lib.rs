// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// brasilkit-calendar — Brazilian national holiday calendar.
//
// A single computus date drives the three movable feasts; eight fixed
// month/day pairs complete the set of eleven. Everything downstream
// (membership, month filter, next-holiday search, business-day counting)
// recomputes the year set on demand — pure functions, no cache, no state.

pub mod business;
pub mod easter;
pub mod holidays;

pub use business::business_days_between;
pub use easter::easter;
pub use holidays::{
    fixed_holidays, holidays, holidays_in_month, is_holiday, is_holiday_str, movable_holidays,
    next_holiday,
};
