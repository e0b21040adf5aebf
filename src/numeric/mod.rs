// ============================================================================
// Numeric Module
// Exact integer helpers shared by measurements and reference lookups
// ============================================================================
//
// This module provides:
// - CalcError: Error type for conversions and coin arithmetic
// - find_closest_values: Logarithmic neighbor search over sorted slices
// - get_progress: Clamped whole-percent progress between two bounds
//
// Design principles:
// - Big-integer arithmetic until the final display step
// - All fallible operations return Result (no panics)

mod closest;
mod errors;
mod progress;

pub use closest::{find_closest_values, find_closest_values_by_key, ClosestValues};
pub use errors::{CalcError, CalcResult};
pub use progress::get_progress;
