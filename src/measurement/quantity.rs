// ============================================================================
// Measurement
// Big-integer quantity in a dimension's base unit, with an exponent
// ============================================================================

use super::dimension::{Dimension, Length, Mass};
use super::format::{
    exponent_to_string, format_fixed_point, FormatOptions, DEFAULT_PRECISION, MAX_PRECISION,
};
use super::unit::Unit;
use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A quantity of dimension `D`.
///
/// `value` is always a count of the dimension's base unit, raised to
/// `exponent` (1 = linear, 2 = area, 3 = volume). A volume of 2 cm³ is stored
/// as `Measurement::<Length>::with_exponent(2_000_000_000_000, 3)`.
///
/// # Example
/// ```
/// use coin_calc::measurement::Milligram;
///
/// let mass = Milligram::new(1_500);
/// assert_eq!(mass.to("g", 3).unwrap(), 1.5);
/// assert_eq!(mass.to_string(), "1.5 g");
/// ```
pub struct Measurement<D: Dimension> {
    value: BigInt,
    exponent: u32,
    _dimension: PhantomData<D>,
}

/// Length measured in micrometers
pub type Micrometer = Measurement<Length>;

/// Mass measured in milligrams
pub type Milligram = Measurement<Mass>;

impl<D: Dimension> Measurement<D> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a linear measurement (exponent 1).
    #[inline]
    pub fn new(value: impl Into<BigInt>) -> Self {
        Self {
            value: value.into(),
            exponent: 1,
            _dimension: PhantomData,
        }
    }

    /// Create a measurement raised to `exponent`.
    ///
    /// # Errors
    /// Returns `InvalidExponent` if `exponent` is 0.
    pub fn with_exponent(value: impl Into<BigInt>, exponent: u32) -> CalcResult<Self> {
        if exponent == 0 {
            return Err(CalcError::InvalidExponent(exponent));
        }

        Ok(Self {
            value: value.into(),
            exponent,
            _dimension: PhantomData,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Value in base units.
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Find a unit of this dimension by its symbol.
    #[inline]
    pub fn unit(symbol: &str) -> Option<&'static Unit> {
        D::units().find(symbol)
    }

    /// Largest unit whose `factor^exponent` does not exceed the value.
    #[inline]
    pub fn best_unit(&self) -> &'static Unit {
        D::units().best_fit(&self.value, self.exponent)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to the unit with the given symbol.
    ///
    /// The value is truncated to `precision` fractional digits using integer
    /// arithmetic, then converted to `f64`.
    ///
    /// # Errors
    /// - `UnknownUnit` if the symbol is not in this dimension's table
    /// - `InvalidPrecision` if `precision` exceeds [`MAX_PRECISION`]
    pub fn to(&self, symbol: &str, precision: u32) -> CalcResult<f64> {
        let unit = Self::unit(symbol).ok_or_else(|| {
            tracing::debug!("Unknown {} unit requested: {:?}", D::NAME, symbol);
            CalcError::UnknownUnit(symbol.to_string())
        })?;

        self.to_number(&unit.factor, precision)
    }

    /// Convert using a raw conversion factor.
    ///
    /// # Errors
    /// - `ZeroFactor` if `factor` is zero
    /// - `InvalidPrecision` if `precision` exceeds [`MAX_PRECISION`]
    pub fn to_number(&self, factor: &BigInt, precision: u32) -> CalcResult<f64> {
        let scaled = self.scaled(factor, precision)?;
        let number = scaled.to_f64().unwrap_or(f64::INFINITY);
        let digits =
            i32::try_from(precision).map_err(|_| CalcError::InvalidPrecision(precision))?;

        Ok(number / 10f64.powi(digits))
    }

    /// `value * 10^precision / factor^exponent`, truncated toward zero.
    fn scaled(&self, factor: &BigInt, precision: u32) -> CalcResult<BigInt> {
        if precision > MAX_PRECISION {
            tracing::debug!("Rejected precision {} for {}", precision, D::NAME);
            return Err(CalcError::InvalidPrecision(precision));
        }
        if factor.is_zero() {
            return Err(CalcError::ZeroFactor);
        }

        let precision_factor = BigInt::from(10u8).pow(precision);
        Ok(&self.value * precision_factor / factor.pow(self.exponent))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with the best-fit unit, e.g. `"1,250.5 km"` or `"3 cm³"`.
    ///
    /// Every one of the `precision` fractional digits is printed exactly
    /// (trailing zeros trimmed); digits are not rounded to three places.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if the options fail validation.
    pub fn format(&self, options: &FormatOptions) -> CalcResult<String> {
        options.validate()?;

        let unit = self.best_unit();
        let scaled = self.scaled(&unit.factor, options.precision)?;
        let title = if options.abbreviated {
            &unit.symbol
        } else {
            &unit.title
        };

        Ok(format!(
            "{} {}{}",
            format_fixed_point(&scaled, options.precision),
            title,
            exponent_to_string(self.exponent)
        ))
    }

    /// Render with the best-fit unit.
    ///
    /// Shorthand for [`format`](Self::format) with explicit options.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` exceeds [`MAX_PRECISION`].
    #[inline]
    pub fn to_human_string(&self, abbreviated: bool, precision: u32) -> CalcResult<String> {
        self.format(&FormatOptions::new(abbreviated, precision))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<D: Dimension> Clone for Measurement<D> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            exponent: self.exponent,
            _dimension: PhantomData,
        }
    }
}

impl<D: Dimension> PartialEq for Measurement<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.exponent == other.exponent
    }
}

impl<D: Dimension> Eq for Measurement<D> {}

impl<D: Dimension> PartialOrd for Measurement<D> {
    /// Only measurements with the same exponent are comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.exponent == other.exponent).then(|| self.value.cmp(&other.value))
    }
}

impl<D: Dimension> Hash for Measurement<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.exponent.hash(state);
    }
}

impl<D: Dimension> Default for Measurement<D> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<D: Dimension> fmt::Debug for Measurement<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Measurement<{}>({}, exponent={})",
            D::NAME,
            self.value,
            self.exponent
        )
    }
}

/// `{}` renders with defaults, `{:.N}` with N fractional digits and `{:#}`
/// with full unit titles. A precision above [`MAX_PRECISION`] is a
/// formatting error.
impl<D: Dimension> fmt::Display for Measurement<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = match f.precision() {
            Some(p) => u32::try_from(p).map_err(|_| fmt::Error)?,
            None => DEFAULT_PRECISION,
        };
        let options = FormatOptions::new(!f.alternate(), precision);

        f.write_str(&self.format(&options).map_err(|_| fmt::Error)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_convert_with_floating_point() {
        assert_eq!(Milligram::new(1).to("g", 3).unwrap(), 0.001);
        assert_eq!(Milligram::new(50).to("g", 3).unwrap(), 0.05);
        assert_eq!(Milligram::new(1_234).to("g", 1).unwrap(), 1.2);
    }

    #[test]
    fn test_micrometer_conversion() {
        let cases: [(u128, &str, f64); 9] = [
            (1, "μm", 1.0),
            (2_000, "mm", 2.0),
            (30_000, "cm", 3.0),
            (400_000, "dm", 4.0),
            (5_000_000, "m", 5.0),
            (6_000_000_000, "km", 6.0),
            (7_000_000_000_000_000, "Mm", 7.0),
            (8_000_000_000_000_000_000, "Gm", 8.0),
            (9_000_000_000_000_000_000_000, "Tm", 9.0),
        ];

        for (value, symbol, expected) in cases {
            assert_eq!(Micrometer::new(value).to(symbol, 3).unwrap(), expected, "{}", symbol);
        }
    }

    #[test]
    fn test_milligram_conversion() {
        let cases: [(u128, &str, f64); 6] = [
            (1, "mg", 1.0),
            (2_000, "g", 2.0),
            (3_000_000, "kg", 3.0),
            (4_000_000_000, "t", 4.0),
            (5_000_000_000_000, "Kt", 5.0),
            (6_000_000_000_000_000, "Mt", 6.0),
        ];

        for (value, symbol, expected) in cases {
            assert_eq!(Milligram::new(value).to(symbol, 3).unwrap(), expected, "{}", symbol);
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            Micrometer::new(1).to("xx", 3),
            Err(CalcError::UnknownUnit("xx".to_string()))
        );
        // Mass symbols are not valid lengths
        assert!(Micrometer::new(1).to("kg", 3).is_err());
    }

    #[test]
    fn test_to_number_raw_factor() {
        let length = Micrometer::new(2_500);
        assert_eq!(length.to_number(&BigInt::from(1_000), 3).unwrap(), 2.5);
        assert_eq!(length.to_number(&BigInt::from(1), 0).unwrap(), 2500.0);
        assert_eq!(
            length.to_number(&BigInt::zero(), 3),
            Err(CalcError::ZeroFactor)
        );
    }

    #[test]
    fn test_conversion_with_exponent() {
        // 1 cm³ = 10^12 μm³
        let volume = Micrometer::with_exponent(2_000_000_000_000u64, 3).unwrap();
        assert_eq!(volume.to("cm", 3).unwrap(), 2.0);
        assert_eq!(volume.to("mm", 0).unwrap(), 2000.0);
    }

    #[test]
    fn test_precision_out_of_range() {
        use std::fmt::Write;

        assert_eq!(
            Micrometer::new(1).to("μm", 400),
            Err(CalcError::InvalidPrecision(400))
        );
        assert_eq!(
            Micrometer::new(5).to_number(&BigInt::from(1), MAX_PRECISION + 1),
            Err(CalcError::InvalidPrecision(MAX_PRECISION + 1))
        );
        assert_eq!(Micrometer::new(5).to("μm", MAX_PRECISION).unwrap(), 5.0);
        assert_eq!(
            Milligram::new(1_500).to_human_string(true, 320),
            Err(CalcError::InvalidPrecision(320))
        );

        let mut out = String::new();
        assert!(write!(out, "{:.400}", Milligram::new(1_500)).is_err());
        assert!(write!(out, "{:.15}", Milligram::new(1_500)).is_ok());
    }

    #[test]
    fn test_invalid_exponent() {
        assert_eq!(
            Micrometer::with_exponent(1, 0),
            Err(CalcError::InvalidExponent(0))
        );
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Milligram::new(1).to_string(), "1 mg");
        assert_eq!(Milligram::new(1_000).to_string(), "1 g");
        assert_eq!(Milligram::new(1_000_000).to_string(), "1 kg");
        assert_eq!(Milligram::new(1_000_000_000).to_string(), "1 t");
        assert_eq!(Milligram::new(1_000_000_000_000u64).to_string(), "1 Kt");
        assert_eq!(Milligram::new(1_000_000_000_000_000u64).to_string(), "1 Mt");
        assert_eq!(Milligram::new(0).to_string(), "0 mg");
    }

    #[test]
    fn test_to_string_with_precision() {
        assert_eq!(Milligram::new(1_500).to_human_string(true, 1).unwrap(), "1.5 g");
        assert_eq!(Milligram::new(1_420).to_human_string(true, 2).unwrap(), "1.42 g");
        assert_eq!(Milligram::new(1_420).to_human_string(true, 1).unwrap(), "1.4 g");
        // Fractional digits beyond three are kept, not rounded
        assert_eq!(
            Milligram::new(1_234_567).to_human_string(true, 5).unwrap(),
            "1.23456 kg"
        );
        assert_eq!(format!("{:.2}", Milligram::new(1_420)), "1.42 g");
    }

    #[test]
    fn test_to_string_full_title() {
        assert_eq!(
            Milligram::new(2_000_000).to_human_string(false, 3).unwrap(),
            "2 kilogram(s)"
        );
        assert_eq!(format!("{:#}", Micrometer::new(1_500_000)), "1.5 meter(s)");
    }

    #[test]
    fn test_to_string_with_exponent() {
        assert_eq!(Milligram::new(10_000).to_string(), "10 g");
        assert_eq!(
            Milligram::with_exponent(10_000, 1).unwrap().to_string(),
            "10 g"
        );
        assert_eq!(
            Milligram::with_exponent(10_000_000, 2).unwrap().to_string(),
            "10 g²"
        );
        assert_eq!(
            Milligram::with_exponent(10_000_000_000u64, 3).unwrap().to_string(),
            "10 g³"
        );
    }

    #[test]
    fn test_to_string_groups_thousands() {
        // Largest length unit caps the scale
        let far = Micrometer::new(1_234_567_000_000_000_000_000_000u128);
        assert_eq!(far.to_string(), "1,234.567 Tm");
    }

    #[test]
    fn test_ordering() {
        let a = Micrometer::new(10);
        let b = Micrometer::new(20);
        let cubed = Micrometer::with_exponent(20, 3).unwrap();

        assert!(a < b);
        assert_eq!(a.partial_cmp(&cubed), None);
        assert_ne!(b, cubed);
    }

    proptest! {
        #[test]
        fn prop_best_fit_never_exceeds_value(value in any::<u64>(), exponent in 1u32..4) {
            let measurement = Micrometer::with_exponent(value, exponent).unwrap();
            let unit = measurement.best_unit();
            let threshold = unit.factor.pow(exponent);

            prop_assert!(
                threshold <= *measurement.value() || unit.factor == BigInt::from(1)
            );
        }

        #[test]
        fn prop_round_trip_within_precision(value in any::<u64>()) {
            let measurement = Milligram::new(value);
            let unit = measurement.best_unit();
            let converted = measurement.to(&unit.symbol, 3).unwrap();
            let factor = unit.factor.to_f64().unwrap();

            let restored = converted * factor;
            let tolerance = factor / 1_000.0 + (value as f64) * 1e-12 + 1.0;
            prop_assert!((restored - value as f64).abs() <= tolerance);
        }
    }
}
