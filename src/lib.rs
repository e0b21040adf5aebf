// ============================================================================
// Coin Calculator Library
// Exact-arithmetic measurements and coin physics
// ============================================================================

//! # Coin Calc
//!
//! Converts a sum of money, expressed in one coin denomination, into physical
//! quantities and renders them in human-readable units.
//!
//! ## Features
//!
//! - **Exact arithmetic**: base-unit values are big integers; floating point
//!   only appears in the final conversion step
//! - **Generic measurements**: length and mass share one engine configured by
//!   a validated unit table
//! - **Coin physics**: count, stack height, mass and cylinder volume with an
//!   explicit overflow guard
//! - **Reference lookups**: logarithmic neighbor search and clamped progress
//!   to place a quantity among everyday objects
//!
//! ## Example
//!
//! ```rust
//! use coin_calc::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let coin = Coin::new(CoinRecord::new("2 euro", Decimal::from(2), 25750, 2200, 8500)).unwrap();
//! let sum = Decimal::from(1000);
//!
//! assert_eq!(coin.sum_to_count(sum).unwrap(), 500);
//! assert_eq!(coin.sum_to_height(sum).unwrap().to_string(), "1.1 m");
//! assert_eq!(coin.sum_to_mass(sum).unwrap().to_string(), "4.25 kg");
//!
//! let heights = ReferenceTable::new(vec![
//!     ReferenceObject::new("Pencil", Micrometer::new(190_000)),
//!     ReferenceObject::new("Broom", Micrometer::new(1_400_000)),
//! ])
//! .unwrap();
//!
//! let placement = heights.locate(&coin.sum_to_height(sum).unwrap());
//! assert_eq!(placement.below.unwrap().title, "Pencil");
//! assert_eq!(placement.above.unwrap().title, "Broom");
//! ```

pub mod domain;
#[cfg(feature = "logging")]
pub mod logging;
pub mod measurement;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Coin, CoinRecord, Currency, CurrencyRecord, Placement, ReferenceObject, ReferenceRecord,
        ReferenceTable,
    };
    pub use crate::measurement::{
        exponent_to_string, Dimension, FormatOptions, Length, Mass, Measurement, Micrometer,
        Milligram, Unit, UnitTable,
    };
    pub use crate::numeric::{
        find_closest_values, find_closest_values_by_key, get_progress, CalcError, CalcResult,
    };
}
