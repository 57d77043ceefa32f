// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Brasilkit.
//
// The validation and calendar APIs never let these cross their public
// boundary — validation folds to `false`, formatting to an empty string.
// The enum exists so that callers who want the rejection reason (the CLI,
// diagnostics) can ask for it explicitly.

use thiserror::Error;

/// Top-level error type for all Brasilkit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrasilkitError {
    // -- Identifier validation --
    #[error("wrong length: expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("degenerate sequence: all {0} digits are identical")]
    DegenerateDigits(usize),

    #[error("check digits do not match: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    // -- Date handling --
    #[error("unparsable date: {0:?} matches no accepted input format")]
    UnparsableDate(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BrasilkitError>;
