// ============================================================================
// Calculation Errors
// Error types for unit conversion and coin arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while converting measurements or deriving coin
/// quantities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalcError {
    /// Requested unit symbol is absent from the quantity's unit table
    UnknownUnit(String),
    /// Result cannot be represented without precision loss
    ValueTooLarge,
    /// Raw conversion factor of zero
    ZeroFactor,
    /// Exponent must be at least 1
    InvalidExponent(u32),
    /// Precision outside the supported range
    InvalidPrecision(u32),
    /// Unit table is empty or does not start at the base unit
    InvalidUnitTable,
    /// Unit factor at `index` is smaller than its predecessor
    UnsortedUnits { index: usize },
    /// Reference object at `index` is smaller than its predecessor
    UnsortedReferences { index: usize },
    /// Coin record failed validation
    InvalidCoin(&'static str),
    /// Input document could not be parsed
    Parse(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::UnknownUnit(symbol) => write!(f, "unit \"{}\" doesn't exist", symbol),
            CalcError::ValueTooLarge => {
                write!(f, "value is too large to be represented as a number")
            },
            CalcError::ZeroFactor => write!(f, "conversion factor must not be zero"),
            CalcError::InvalidExponent(exponent) => {
                write!(f, "invalid exponent {}: must be a positive integer", exponent)
            },
            CalcError::InvalidPrecision(precision) => {
                write!(f, "invalid precision {}: at most 15 digits are supported", precision)
            },
            CalcError::InvalidUnitTable => {
                write!(f, "unit table must be non-empty and start with a factor of 1")
            },
            CalcError::UnsortedUnits { index } => {
                write!(f, "unit table is not sorted ascending at index {}", index)
            },
            CalcError::UnsortedReferences { index } => {
                write!(f, "reference objects are not sorted ascending at index {}", index)
            },
            CalcError::InvalidCoin(reason) => write!(f, "invalid coin: {}", reason),
            CalcError::Parse(message) => write!(f, "parse error: {}", message),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(feature = "serde")]
impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Parse(err.to_string())
    }
}
