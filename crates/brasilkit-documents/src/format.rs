// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display formatting for taxpayer identifiers.
//
// Formatting doubles as validation: an invalid identifier renders as the
// empty string, never as a panic or an error.

use brasilkit_core::types::DocumentKind;

use crate::checksum::{CheckDigitSpec, check_digits};
use crate::normalize::normalize;

/// Render an identifier in its punctuated display form.
///
/// CPF: `ddd.ddd.ddd-dd`. CNPJ: `dd.ddd.ddd/dddd-dd`. Returns `""` when the
/// input does not validate.
pub fn format(raw: &str, kind: DocumentKind) -> String {
    let digits = normalize(raw);
    if check_digits(&digits, CheckDigitSpec::for_kind(kind)).is_err() {
        return String::new();
    }

    match kind {
        DocumentKind::Cpf => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        DocumentKind::Cnpj => format!(
            "{}.{}.{}/{}-{}",
            &digits[..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..]
        ),
    }
}
