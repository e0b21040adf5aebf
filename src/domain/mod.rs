// ============================================================================
// Domain Models Module
// Coins, currencies and reference objects
// ============================================================================

pub mod coin;
pub mod currency;
pub mod reference;

pub use coin::{Coin, CoinRecord, MAX_SAFE_INTEGER, PI_PRECISION, PI_SCALED};
#[cfg(feature = "serde")]
pub use currency::load_currencies;
pub use currency::{Currency, CurrencyRecord};
pub use reference::{Placement, ReferenceObject, ReferenceRecord, ReferenceTable};
