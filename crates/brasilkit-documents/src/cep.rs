// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Offline CEP (postal code) helpers.
//
// A CEP has no check digit: validity is purely "eight digits after
// normalization". Address lookup against the postal service is a remote
// collaborator and deliberately not part of this crate.

use crate::normalize::normalize;

/// True when the input contains exactly eight digits once punctuation is
/// stripped.
pub fn validate_cep(raw: &str) -> bool {
    normalize(raw).len() == 8
}

/// Render a CEP as `ddddd-ddd`, or `""` when invalid.
pub fn format_cep(raw: &str) -> String {
    let digits = normalize(raw);
    if digits.len() != 8 {
        return String::new();
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}
