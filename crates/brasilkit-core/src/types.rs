// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Brasilkit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two Brazilian taxpayer-identifier kinds.
///
/// Dispatch between them is always by this enum, never by comparing a
/// format-name string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// CPF — 11-digit individual taxpayer registry number.
    Cpf,
    /// CNPJ — 14-digit legal-entity taxpayer registry number.
    Cnpj,
}

impl DocumentKind {
    /// Canonical digit count for this kind.
    pub fn expected_len(&self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Display name used in CLI output and log messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A Brazilian national holiday for one specific year.
///
/// Pure value — recomputed fresh on every calendar query, never cached or
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// Official Portuguese name, e.g. "Ano Novo".
    pub name: &'static str,
    pub date: NaiveDate,
    /// True for Easter-relative holidays, false for fixed month/day ones.
    pub movable: bool,
}

impl Holiday {
    pub fn new(name: &'static str, date: NaiveDate, movable: bool) -> Self {
        Self {
            name,
            date,
            movable,
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.date.format("%d/%m/%Y"))
    }
}
