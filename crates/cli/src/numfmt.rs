// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric formatting and padding for fixed-width reports.
//!
//! Ratios are shown with exactly two fraction digits in a locale-fixed
//! (US) style. Grouped and ungrouped renderings are separate functions so
//! no caller can observe a half-switched formatter.

/// Platform line separator.
pub const NL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Divide, rounding half-up to two decimals. A zero divisor yields `0.0`.
///
/// Empty collections are normal input, so averages over them must not
/// produce NaN or infinity.
pub fn divide(dividend: u64, divisor: u64) -> f64 {
    if divisor == 0 {
        return 0.0;
    }
    let ratio = dividend as f64 / divisor as f64;
    (ratio * 100.0 + 0.5).floor() / 100.0
}

/// Format with two fraction digits and no grouping (`1234.50`).
pub fn format_ungrouped(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format with two fraction digits and comma thousands grouping (`1,234.50`).
pub fn format_grouped(value: f64) -> String {
    let plain = format_ungrouped(value);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int, frac) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac}")
}

/// Right-align `s` in a field of `width` characters.
///
/// Values at or beyond the width are returned unchanged, never truncated.
pub fn pad(s: &str, width: usize) -> String {
    format!("{:>width$}", s)
}

/// Number of decimal digits in `n`.
pub fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
#[path = "numfmt_tests.rs"]
mod tests;
