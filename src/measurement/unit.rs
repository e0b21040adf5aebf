// ============================================================================
// Units of Measurement
// Unit definitions and validated, ascending unit tables
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::One;

/// Compile-time unit definition.
///
/// Used for the built-in tables, which are checked with [`specs_ascending`]
/// in a const context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub symbol: &'static str,
    pub title: &'static str,
    pub factor: u128,
}

impl UnitSpec {
    pub const fn new(symbol: &'static str, title: &'static str, factor: u128) -> Self {
        Self {
            symbol,
            title,
            factor,
        }
    }
}

/// Check that a spec table starts at factor 1 and never decreases.
pub const fn specs_ascending(specs: &[UnitSpec]) -> bool {
    if specs.is_empty() || specs[0].factor != 1 {
        return false;
    }

    let mut i = 1;
    while i < specs.len() {
        if specs[i].factor < specs[i - 1].factor {
            return false;
        }
        i += 1;
    }
    true
}

/// Unit of measurement with its multiplier to the base unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Short unit symbol
    pub symbol: String,
    /// Full unit title
    pub title: String,
    /// Conversion factor to the base unit
    pub factor: BigInt,
}

impl Unit {
    pub fn new(
        symbol: impl Into<String>,
        title: impl Into<String>,
        factor: impl Into<BigInt>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            title: title.into(),
            factor: factor.into(),
        }
    }
}

impl From<&UnitSpec> for Unit {
    fn from(spec: &UnitSpec) -> Self {
        Self::new(spec.symbol, spec.title, spec.factor)
    }
}

/// Ordered unit table of a quantity.
///
/// The first unit is always the base unit (factor 1) and factors never
/// decrease; best-fit formatting relies on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: Vec<Unit>,
}

impl UnitTable {
    /// Build a table, validating its ordering.
    ///
    /// # Errors
    /// - `InvalidUnitTable` if `units` is empty or the first factor is not 1
    /// - `UnsortedUnits` at the first unit whose factor is below its predecessor
    pub fn new(units: Vec<Unit>) -> CalcResult<Self> {
        match units.first() {
            Some(base) if base.factor.is_one() => {},
            _ => return Err(CalcError::InvalidUnitTable),
        }

        if let Some(index) = units
            .windows(2)
            .position(|pair| pair[1].factor < pair[0].factor)
        {
            tracing::debug!("Rejected unit table, unsorted at index {}", index + 1);
            return Err(CalcError::UnsortedUnits { index: index + 1 });
        }

        Ok(Self { units })
    }

    /// Build a table from const specs already checked by [`specs_ascending`].
    pub(crate) fn from_specs(specs: &[UnitSpec]) -> Self {
        debug_assert!(specs_ascending(specs));
        Self {
            units: specs.iter().map(Unit::from).collect(),
        }
    }

    /// The base unit (factor 1).
    #[inline]
    pub fn base(&self) -> &Unit {
        &self.units[0]
    }

    /// Find unit by its symbol.
    pub fn find(&self, symbol: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.symbol == symbol)
    }

    /// Largest unit whose `factor^exponent` does not exceed `value`.
    ///
    /// Falls back to the base unit when `value` is below every threshold.
    pub fn best_fit(&self, value: &BigInt, exponent: u32) -> &Unit {
        let mut best = self.base();

        for unit in &self.units {
            if *value < unit.factor.pow(exponent) {
                break;
            }
            best = unit;
        }

        best
    }

    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always false; an empty table is rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(factors: &[u64]) -> CalcResult<UnitTable> {
        UnitTable::new(
            factors
                .iter()
                .enumerate()
                .map(|(i, &factor)| Unit::new(format!("u{}", i), format!("unit {}", i), factor))
                .collect(),
        )
    }

    #[test]
    fn test_valid_table() {
        let table = table(&[1, 10, 100, 100, 1000]).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.base().symbol, "u0");
        assert_eq!(table.find("u2").unwrap().factor, BigInt::from(100));
        assert!(table.find("xx").is_none());
    }

    #[test]
    fn test_unsorted_table_rejected() {
        assert_eq!(
            table(&[1, 1000, 10]),
            Err(CalcError::UnsortedUnits { index: 2 })
        );
    }

    #[test]
    fn test_table_must_start_at_base() {
        assert_eq!(table(&[]), Err(CalcError::InvalidUnitTable));
        assert_eq!(table(&[10, 100]), Err(CalcError::InvalidUnitTable));
    }

    #[test]
    fn test_specs_ascending() {
        const GOOD: &[UnitSpec] = &[UnitSpec::new("a", "a", 1), UnitSpec::new("b", "b", 5)];
        const BAD: &[UnitSpec] = &[UnitSpec::new("a", "a", 1), UnitSpec::new("b", "b", 0)];
        assert!(specs_ascending(GOOD));
        assert!(!specs_ascending(BAD));
        assert!(!specs_ascending(&[]));
    }

    #[test]
    fn test_best_fit() {
        let table = table(&[1, 1000, 1_000_000]).unwrap();
        assert_eq!(table.best_fit(&BigInt::from(0), 1).symbol, "u0");
        assert_eq!(table.best_fit(&BigInt::from(999), 1).symbol, "u0");
        assert_eq!(table.best_fit(&BigInt::from(1000), 1).symbol, "u1");
        assert_eq!(table.best_fit(&BigInt::from(5_000_000), 1).symbol, "u2");
        // 1000^2 = 1_000_000 is the threshold of u1 when squared
        assert_eq!(table.best_fit(&BigInt::from(999_999), 2).symbol, "u0");
        assert_eq!(table.best_fit(&BigInt::from(1_000_000), 2).symbol, "u1");
    }
}
