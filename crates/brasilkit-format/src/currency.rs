// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Currency and percentage rendering in Brazilian convention: '.' groups
// thousands, ',' marks decimals. Implemented as plain string assembly —
// platform locale state is never touched.

/// Render a value as Brazilian Real, e.g. `R$ 1.234.567,89`.
///
/// `symbol` controls the "R$ " prefix. Always two decimal places.
pub fn format_brl(value: f64, symbol: bool) -> String {
    let amount = brazilian_number(value, 2);
    if symbol {
        format!("R$ {amount}")
    } else {
        amount
    }
}

/// Render a ratio as a Brazilian percentage: `0.15` becomes `15,00%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value * 100.0);
    format!("{}%", rendered.replace('.', ","))
}

/// Fixed-point rendering with '.' thousands groups and ',' decimal mark.
fn brazilian_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped},{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
