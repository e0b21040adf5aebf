// ============================================================================
// Currency Domain Model
// ============================================================================

use super::coin::{Coin, CoinRecord};
use crate::numeric::CalcResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw currency definition as supplied by reference data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyRecord {
    pub title: String,
    pub country: String,
    /// ISO 4217 code (e.g., "EUR")
    pub code: String,
    pub symbol: String,
    pub coins: Vec<CoinRecord>,
}

/// Country currency with its validated coins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub title: String,
    pub country: String,
    pub code: String,
    pub symbol: String,
    pub coins: Vec<Coin>,
}

impl Currency {
    /// Normalize a record, validating every coin.
    ///
    /// # Errors
    /// Returns the first coin validation error.
    pub fn new(record: CurrencyRecord) -> CalcResult<Self> {
        let coins = record
            .coins
            .into_iter()
            .map(Coin::new)
            .collect::<CalcResult<Vec<_>>>()?;

        tracing::debug!("Loaded currency {} with {} coins", record.code, coins.len());

        Ok(Self {
            title: record.title,
            country: record.country,
            code: record.code,
            symbol: record.symbol,
            coins,
        })
    }

    /// Find a coin by its label.
    pub fn coin(&self, label: &str) -> Option<&Coin> {
        self.coins.iter().find(|coin| coin.label() == label)
    }
}

impl TryFrom<CurrencyRecord> for Currency {
    type Error = crate::numeric::CalcError;

    fn try_from(record: CurrencyRecord) -> CalcResult<Self> {
        Self::new(record)
    }
}

// ============================================================================
// JSON Loading
// ============================================================================

#[cfg(feature = "serde")]
impl Currency {
    /// Parse a single currency document.
    ///
    /// # Errors
    /// - `Parse` if the document is malformed
    /// - `InvalidCoin` if a coin fails validation
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let record: CurrencyRecord = serde_json::from_str(json)?;
        Self::new(record)
    }
}

/// Parse a JSON array of currency documents.
#[cfg(feature = "serde")]
pub fn load_currencies(json: &str) -> CalcResult<Vec<Currency>> {
    let records: Vec<CurrencyRecord> = serde_json::from_str(json)?;
    records.into_iter().map(Currency::new).collect()
}
