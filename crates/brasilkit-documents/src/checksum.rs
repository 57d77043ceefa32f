// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generic weighted modulo-11 check-digit engine.
//
// Both Brazilian identifier kinds share one algorithm; only the length and
// the two weight tables differ. The engine reports *why* a number was
// rejected; the boolean `validate` wrapper folds every rejection to `false`
// so nothing error-shaped crosses the end-user API.

use brasilkit_core::error::BrasilkitError;
use brasilkit_core::types::DocumentKind;
use tracing::debug;

use crate::normalize::normalize;

/// Weight configuration for one identifier kind.
///
/// `second_weights` is one element longer than `first_weights`: the second
/// check digit is computed over the payload plus the first check digit.
#[derive(Debug, Clone, Copy)]
pub struct CheckDigitSpec {
    /// Total digit count, check digits included.
    pub length: usize,
    pub first_weights: &'static [u32],
    pub second_weights: &'static [u32],
}

/// CPF: positional weights 10..2, then 11..2.
pub const CPF_SPEC: CheckDigitSpec = CheckDigitSpec {
    length: 11,
    first_weights: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
};

/// CNPJ: the fixed 12-entry table, then the same table with a leading 6.
pub const CNPJ_SPEC: CheckDigitSpec = CheckDigitSpec {
    length: 14,
    first_weights: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second_weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
};

impl CheckDigitSpec {
    /// The static spec instance for an identifier kind.
    pub fn for_kind(kind: DocumentKind) -> &'static CheckDigitSpec {
        match kind {
            DocumentKind::Cpf => &CPF_SPEC,
            DocumentKind::Cnpj => &CNPJ_SPEC,
        }
    }
}

/// Fold a weighted sum into a check digit: `11 - (sum mod 11)`, with the
/// 10/11 results mapped to 0.
fn fold(sum: u32) -> u32 {
    let digit = 11 - (sum % 11);
    if digit >= 10 { 0 } else { digit }
}

/// Run the full check-digit algorithm over a canonical digit string.
///
/// Expects already-normalized input; any stray non-digit characters are
/// ignored, which the length check then catches. Returns the specific
/// rejection so front-ends can explain it.
pub fn check_digits(digits: &str, spec: &CheckDigitSpec) -> Result<(), BrasilkitError> {
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if values.len() != spec.length {
        return Err(BrasilkitError::WrongLength {
            expected: spec.length,
            actual: values.len(),
        });
    }

    // Degenerate sequences like 111.111.111-11 satisfy the arithmetic but
    // are never issued.
    if values.iter().all(|&v| v == values[0]) {
        return Err(BrasilkitError::DegenerateDigits(spec.length));
    }

    let payload = &values[..spec.length - 2];

    let first_sum: u32 = payload
        .iter()
        .zip(spec.first_weights)
        .map(|(&d, &w)| d * w)
        .sum();
    let d1 = fold(first_sum);

    // Second pass runs over the payload plus the derived first check digit.
    let second_sum: u32 = payload
        .iter()
        .chain(std::iter::once(&d1))
        .zip(spec.second_weights)
        .map(|(&d, &w)| d * w)
        .sum();
    let d2 = fold(second_sum);

    let supplied = &values[spec.length - 2..];
    if supplied == [d1, d2] {
        Ok(())
    } else {
        Err(BrasilkitError::ChecksumMismatch {
            expected: format!("{d1}{d2}"),
            actual: format!("{}{}", supplied[0], supplied[1]),
        })
    }
}

/// Validate a raw identifier of the given kind.
///
/// Normalizes first, so punctuated input is accepted. Every rejection path
/// returns `false`; this function never fails.
pub fn validate(raw: &str, kind: DocumentKind) -> bool {
    let digits = normalize(raw);
    match check_digits(&digits, CheckDigitSpec::for_kind(kind)) {
        Ok(()) => true,
        Err(reason) => {
            debug!(kind = %kind, %reason, "identifier rejected");
            false
        }
    }
}
