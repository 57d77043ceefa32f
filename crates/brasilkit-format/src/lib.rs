// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// brasilkit-format — Brazilian-convention string rendering.
//
// Currency and percentages with comma decimals, phone numbers keyed purely
// by digit count, flexible date parsing to dd/mm/yyyy, and fixed-table
// accent stripping. No locale state is ever consulted; every separator swap
// is an explicit string algorithm.

pub mod currency;
pub mod date;
pub mod phone;
pub mod text;

pub use currency::{format_brl, format_percent};
pub use date::{format_br, parse_flexible};
pub use phone::format_phone;
pub use text::strip_accents;
