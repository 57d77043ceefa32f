// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language messages for validation failures.
//
// The library itself reports failures as booleans and empty strings; this
// module is for front-ends that want to tell the user *why* an identifier
// or date was rejected.

use crate::error::BrasilkitError;

/// A plain-language rejection with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct PlainMessage {
    /// One-line summary of what went wrong.
    pub message: String,
    /// What the user should check or try.
    pub suggestion: String,
}

/// Convert a `BrasilkitError` into a message a non-technical user can act on.
pub fn explain(err: &BrasilkitError) -> PlainMessage {
    match err {
        BrasilkitError::WrongLength { expected, actual } => PlainMessage {
            message: format!("The number has {actual} digits, but {expected} are required."),
            suggestion: "Check for missing or extra digits. Punctuation is fine — it is \
                         stripped before counting."
                .into(),
        },

        BrasilkitError::DegenerateDigits(len) => PlainMessage {
            message: format!("All {len} digits are the same."),
            suggestion: "Sequences like 111.111.111-11 pass the arithmetic check but are \
                         not issued to anyone. Re-check the number you were given."
                .into(),
        },

        BrasilkitError::ChecksumMismatch { expected, actual } => PlainMessage {
            message: format!(
                "The final check digits should be {expected}, but the number ends in {actual}."
            ),
            suggestion: "One of the digits was probably mistyped or transposed.".into(),
        },

        BrasilkitError::UnparsableDate(input) => PlainMessage {
            message: format!("\"{input}\" is not a recognisable date."),
            suggestion: "Use dd/mm/yyyy or yyyy-mm-dd.".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_mentions_both_counts() {
        let msg = explain(&BrasilkitError::WrongLength {
            expected: 11,
            actual: 10,
        });
        assert!(msg.message.contains("10"));
        assert!(msg.message.contains("11"));
    }

    #[test]
    fn unparsable_date_echoes_input() {
        let msg = explain(&BrasilkitError::UnparsableDate("31-31-31".into()));
        assert!(msg.message.contains("31-31-31"));
    }
}
