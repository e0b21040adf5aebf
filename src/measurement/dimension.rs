// ============================================================================
// Physical Dimensions
// Unit tables for length (micrometers) and mass (milligrams)
// ============================================================================

use super::unit::{specs_ascending, UnitSpec, UnitTable};
use std::fmt::Debug;
use std::sync::OnceLock;

/// A physical dimension: a base unit and the table of units derived from it.
///
/// `Measurement<D>` is generic over this trait, so length and mass share one
/// conversion engine and differ only in the table they are configured with.
pub trait Dimension: Debug + Clone + Copy + PartialEq + Eq + 'static {
    /// Human-readable dimension name
    const NAME: &'static str;

    /// Ascending unit table, base unit first
    fn units() -> &'static UnitTable;
}

/// Length, stored in micrometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length;

/// Mass, stored in milligrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mass;

pub const LENGTH_UNITS: &[UnitSpec] = &[
    UnitSpec::new("μm", "micrometer(s)", 1),
    UnitSpec::new("mm", "millimeter(s)", 1_000),
    UnitSpec::new("cm", "centimeter(s)", 10_000),
    UnitSpec::new("dm", "decimeter(s)", 100_000),
    UnitSpec::new("m", "meter(s)", 1_000_000),
    UnitSpec::new("km", "kilometer(s)", 1_000_000_000),
    UnitSpec::new("Mm", "megameter(s)", 1_000_000_000_000_000),
    UnitSpec::new("Gm", "gigameter(s)", 1_000_000_000_000_000_000),
    UnitSpec::new("Tm", "terameter(s)", 1_000_000_000_000_000_000_000),
];

pub const MASS_UNITS: &[UnitSpec] = &[
    UnitSpec::new("mg", "milligram(s)", 1),
    UnitSpec::new("g", "gram(s)", 1_000),
    UnitSpec::new("kg", "kilogram(s)", 1_000_000),
    UnitSpec::new("t", "tonne(s)", 1_000_000_000),
    UnitSpec::new("Kt", "kilotonne(s)", 1_000_000_000_000),
    UnitSpec::new("Mt", "megatonne(s)", 1_000_000_000_000_000),
];

const _: () = assert!(specs_ascending(LENGTH_UNITS));
const _: () = assert!(specs_ascending(MASS_UNITS));

impl Dimension for Length {
    const NAME: &'static str = "length";

    fn units() -> &'static UnitTable {
        static TABLE: OnceLock<UnitTable> = OnceLock::new();
        TABLE.get_or_init(|| UnitTable::from_specs(LENGTH_UNITS))
    }
}

impl Dimension for Mass {
    const NAME: &'static str = "mass";

    fn units() -> &'static UnitTable {
        static TABLE: OnceLock<UnitTable> = OnceLock::new();
        TABLE.get_or_init(|| UnitTable::from_specs(MASS_UNITS))
    }
}
