// ============================================================================
// Measurement Module
// Exact quantities with unit tables and human-readable formatting
// ============================================================================
//
// This module provides:
// - Measurement<D>: Base-unit big-integer value with an exponent
// - Dimension: Unit table configuration (Length, Mass)
// - UnitTable: Validated ascending unit table
// - FormatOptions: Display configuration for best-fit rendering

mod dimension;
mod format;
mod quantity;
mod unit;

pub use dimension::{Dimension, Length, Mass, LENGTH_UNITS, MASS_UNITS};
pub use format::{
    exponent_to_string, format_fixed_point, FormatOptions, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use quantity::{Measurement, Micrometer, Milligram};
pub use unit::{specs_ascending, Unit, UnitSpec, UnitTable};
