// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Output settings consumed by the CLI front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix currency amounts with the "R$ " symbol.
    pub currency_symbol: bool,
    /// Decimal places for percentage output.
    pub percent_decimals: usize,
    /// Count national holidays as business days by default.
    pub count_holidays_as_business_days: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: true,
            percent_decimals: 2,
            count_holidays_as_business_days: false,
        }
    }
}
