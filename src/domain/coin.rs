// ============================================================================
// Coin Domain Model
// Physical properties of one denomination and quantities derived from a sum
// ============================================================================

use crate::measurement::{Micrometer, Milligram};
use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits of π kept by [`PI_SCALED`]
pub const PI_PRECISION: u32 = 13;

/// π × 10^13, rounded to the nearest integer
pub const PI_SCALED: u64 = 31_415_926_535_898;

/// Largest integer an `f64` represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Raw coin definition as supplied by reference data.
///
/// Lengths are in micrometers, mass in milligrams.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoinRecord {
    /// Coin label
    pub label: String,

    /// Coin actual value
    pub value: Decimal,

    /// Coin denomination (defaults to `value`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub denomination: Option<Decimal>,

    pub diameter: u64,
    pub thickness: u64,
    pub mass: u64,
}

impl CoinRecord {
    pub fn new(
        label: impl Into<String>,
        value: Decimal,
        diameter: u64,
        thickness: u64,
        mass: u64,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            denomination: None,
            diameter,
            thickness,
            mass,
        }
    }

    /// Builder method: Set a denomination distinct from the value
    pub fn with_denomination(mut self, denomination: Decimal) -> Self {
        self.denomination = Some(denomination);
        self
    }
}

/// Coin of a certain denomination.
///
/// Immutable once constructed. Every derived quantity starts from
/// [`sum_to_count`](Coin::sum_to_count).
///
/// # Example
/// ```
/// use coin_calc::domain::{Coin, CoinRecord};
/// use rust_decimal::Decimal;
///
/// let coin = Coin::new(CoinRecord::new("5", Decimal::from(5), 2500, 250, 250)).unwrap();
/// assert_eq!(coin.sum_to_count(Decimal::from(20)).unwrap(), 4);
/// assert_eq!(coin.sum_to_height(Decimal::from(20)).unwrap().to_string(), "1 mm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    label: String,
    value: Decimal,
    denomination: Decimal,
    diameter: u64,
    thickness: u64,
    mass: u64,
}

impl Coin {
    /// Create a coin from its record.
    ///
    /// # Errors
    /// Returns `InvalidCoin` if the value or denomination is not positive.
    pub fn new(record: CoinRecord) -> CalcResult<Self> {
        if record.value <= Decimal::ZERO {
            return Err(CalcError::InvalidCoin("value must be positive"));
        }

        let denomination = record.denomination.unwrap_or(record.value);
        if denomination <= Decimal::ZERO {
            return Err(CalcError::InvalidCoin("denomination must be positive"));
        }

        Ok(Self {
            label: record.label,
            value: record.value,
            denomination,
            diameter: record.diameter,
            thickness: record.thickness,
            mass: record.mass,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn value(&self) -> Decimal {
        self.value
    }

    #[inline]
    pub fn denomination(&self) -> Decimal {
        self.denomination
    }

    /// Diameter in micrometers.
    #[inline]
    pub fn diameter(&self) -> u64 {
        self.diameter
    }

    /// Thickness in micrometers.
    #[inline]
    pub fn thickness(&self) -> u64 {
        self.thickness
    }

    /// Mass in milligrams.
    #[inline]
    pub fn mass(&self) -> u64 {
        self.mass
    }

    // ========================================================================
    // Derived Quantities
    // ========================================================================

    /// Count of coins forming `sum`, rounded half away from zero.
    ///
    /// # Errors
    /// Returns `ValueTooLarge` if `sum / value` overflows a `Decimal`.
    pub fn sum_to_count(&self, sum: Decimal) -> CalcResult<i128> {
        let ratio = sum.checked_div(self.value).ok_or_else(|| {
            tracing::debug!("Coin {:?}: sum {} overflows count", self.label, sum);
            CalcError::ValueTooLarge
        })?;

        let mut count = ratio.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        count.rescale(0);

        tracing::trace!("Coin {:?}: {} -> {} coins", self.label, sum, count);
        Ok(count.mantissa())
    }

    /// Height of a coin tower forming `sum`.
    pub fn sum_to_height(&self, sum: Decimal) -> CalcResult<Micrometer> {
        let count = self.sum_to_count(sum)?;
        Ok(Micrometer::new(BigInt::from(count) * self.thickness))
    }

    /// Mass of coins forming `sum`.
    pub fn sum_to_mass(&self, sum: Decimal) -> CalcResult<Milligram> {
        let count = self.sum_to_count(sum)?;
        Ok(Milligram::new(BigInt::from(count) * self.mass))
    }

    /// Volume of coins forming `sum`, as cubic micrometers.
    ///
    /// Each coin is a cylinder of radius `diameter / 2` (integer division).
    ///
    /// # Errors
    /// Returns `ValueTooLarge` if the volume of a single coin exceeds
    /// [`MAX_SAFE_INTEGER`].
    pub fn sum_to_volume(&self, sum: Decimal) -> CalcResult<Micrometer> {
        let volume = self.volume()?;
        let count = self.sum_to_count(sum)?;

        Micrometer::with_exponent(volume * count, 3)
    }

    /// Volume of a single coin in cubic micrometers, truncated.
    fn volume(&self) -> CalcResult<BigInt> {
        let radius = BigInt::from(self.diameter / 2);
        let volume = BigInt::from(PI_SCALED) * self.thickness * radius.pow(2)
            / BigInt::from(10u8).pow(PI_PRECISION);

        if volume > BigInt::from(MAX_SAFE_INTEGER) {
            tracing::debug!(
                "Coin {:?}: volume {} exceeds the safe integer range",
                self.label,
                volume
            );
            return Err(CalcError::ValueTooLarge);
        }

        Ok(volume)
    }
}

impl TryFrom<CoinRecord> for Coin {
    type Error = CalcError;

    fn try_from(record: CoinRecord) -> CalcResult<Self> {
        Self::new(record)
    }
}
