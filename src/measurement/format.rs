// ============================================================================
// Measurement Formatting
// Display options, digit grouping and superscript exponents
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Default number of digits following the decimal point
pub const DEFAULT_PRECISION: u32 = 3;

/// Largest precision accepted by [`FormatOptions::validate`]
pub const MAX_PRECISION: u32 = 15;

/// Options for rendering a measurement as a human-readable string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Use unit symbols ("kg") rather than full titles ("kilogram(s)")
    pub abbreviated: bool,

    /// Number of digits following the decimal point
    pub precision: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            abbreviated: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl FormatOptions {
    pub fn new(abbreviated: bool, precision: u32) -> Self {
        Self {
            abbreviated,
            precision,
        }
    }

    /// Builder method: Use unit symbols
    pub fn abbreviated(mut self) -> Self {
        self.abbreviated = true;
        self
    }

    /// Builder method: Use full unit titles
    pub fn full_titles(mut self) -> Self {
        self.abbreviated = false;
        self
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> CalcResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalcError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

/// Convert a numeric exponent to superscript digits.
///
/// Exponent 1 renders as an empty string.
pub fn exponent_to_string(exponent: u32) -> String {
    if exponent == 1 {
        return String::new();
    }

    exponent
        .to_string()
        .chars()
        .map(|digit| match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

/// Render a fixed-point integer holding `precision` fractional digits.
///
/// The integer part is grouped by thousands with `,`; the fraction uses `.`
/// and drops trailing zeros. All `precision` fractional digits are shown
/// exactly, unlike locale number formatting, which rounds to three.
pub fn format_fixed_point(scaled: &BigInt, precision: u32) -> String {
    let divisor = BigInt::from(10u8).pow(precision);
    let magnitude = scaled.abs();
    let integer = &magnitude / &divisor;
    let fraction = &magnitude % &divisor;

    let mut out = String::new();
    if scaled.is_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer.to_string()));

    if !fraction.is_zero() {
        let digits = format!("{:0>width$}", fraction.to_string(), width = precision as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
