// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document normalization.

/// Strip every character that is not an ASCII decimal digit.
///
/// Total function: performs no length or content validation, so
/// `"123.456.789-09"`, `"123 456 789 09"`, and `"12345678909"` all
/// normalize to the same canonical digit string.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
