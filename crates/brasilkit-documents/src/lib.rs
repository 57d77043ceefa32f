// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// brasilkit-documents — Brazilian taxpayer-identifier pipeline.
//
// Normalization strips punctuation, the generic modulo-11 engine checks the
// two trailing check digits, and the formatter renders the punctuated display
// form gated on validity. Also carries the offline CEP helpers.

pub mod cep;
pub mod checksum;
pub mod format;
pub mod normalize;

pub use cep::{format_cep, validate_cep};
pub use checksum::{CheckDigitSpec, check_digits, validate};
pub use format::format;
pub use normalize::normalize;
