// Currency rate table: code -> multiplier applied to summed amounts.
use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use crate::error::Result;

pub const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Builds a table from raw entries. An empty input gives the default table.
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        if rates.is_empty() {
            return Self::default();
        }
        RateTable { rates }
    }

    /// Parses a JSON object such as `{"INR": 1, "USD": 0.012}`. Entries whose
    /// value is not a number are dropped.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(text)?;
        let mut rates = BTreeMap::new();
        for (code, value) in raw {
            match value.as_f64() {
                Some(rate) => {
                    rates.insert(code, rate);
                }
                None => warn!(code = %code, value = %value, "Ignoring non-numeric rate entry"),
            }
        }
        Ok(Self::new(rates))
    }

    /// Multiplier for `code`. Unknown codes and rates that are not finite and
    /// positive resolve to 1.
    pub fn rate_for(&self, code: &str) -> f64 {
        match self.rates.get(code) {
            Some(&rate) if rate.is_finite() && rate > 0.0 => rate,
            Some(&rate) => {
                warn!(currency = code, rate, "Unusable currency rate, using 1");
                1.0
            }
            None => {
                warn!(currency = code, "Unknown currency code, using 1");
                1.0
            }
        }
    }

    pub fn codes(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            rates: BTreeMap::from([(DEFAULT_CURRENCY.to_string(), 1.0)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = RateTable::default();
        assert_eq!(table.codes(), vec!["INR".to_string()]);
        assert_eq!(table.rate_for("INR"), 1.0);
    }

    #[test]
    fn test_from_json() {
        let table = RateTable::from_json(r#"{"USD": 0.012, "INR": 1}"#).unwrap();
        assert_eq!(table.codes(), vec!["INR".to_string(), "USD".to_string()]);
        assert_eq!(table.rate_for("USD"), 0.012);
    }

    #[test]
    fn test_from_json_empty_object_uses_default() {
        let table = RateTable::from_json("{}").unwrap();
        assert_eq!(table, RateTable::default());
    }

    #[test]
    fn test_from_json_drops_non_numeric_entries() {
        let table = RateTable::from_json(r#"{"INR": 1, "EUR": "n/a"}"#).unwrap();
        assert_eq!(table.codes(), vec!["INR".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(RateTable::from_json("[1, 2]").is_err());
        assert!(RateTable::from_json("not json").is_err());
    }

    #[test]
    fn test_bad_rates_fall_back_to_identity() {
        let table = RateTable::new(BTreeMap::from([
            ("ZERO".to_string(), 0.0),
            ("NEG".to_string(), -2.0),
            ("NAN".to_string(), f64::NAN),
            ("INF".to_string(), f64::INFINITY),
        ]));
        for code in ["ZERO", "NEG", "NAN", "INF", "MISSING"] {
            assert_eq!(table.rate_for(code), 1.0, "code {}", code);
        }
    }
}
