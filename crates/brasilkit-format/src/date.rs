// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flexible date parsing and Brazilian dd/mm/yyyy rendering.

use chrono::NaiveDate;
use tracing::debug;

/// Input formats tried in order. ISO first, then the Brazilian forms.
const INPUT_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Parse a date string against the accepted input formats.
///
/// Returns `None` when nothing matches; failure is a value here, never an
/// error, so callers can fall back however they like.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    for fmt in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    debug!(input, "date matches none of the accepted formats");
    None
}

/// Render a date in the Brazilian convention: `dd/mm/yyyy`.
pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
