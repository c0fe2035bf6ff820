// SPDX-License-Identifier: PMPL-1.0-or-later
//! Formatting helpers for human-readable output.

/// Formats a number with thousands separators and a fixed number of decimals.
pub fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.');
    let sign = if negative { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a USD amount, e.g. `$1,234.50`.
pub fn currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${}", thousands(-amount, 2))
    } else {
        format!("${}", thousands(amount, 2))
    }
}

/// Formats a value already in percent, e.g. `12.3%`.
pub fn percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a percentage change with an explicit sign, e.g. `+12.3%`.
pub fn signed_percentage(value: f64) -> String {
    format!("{:+.1}%", value)
}
