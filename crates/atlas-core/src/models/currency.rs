//! Exchange rates keyed by currency code.

use std::{collections::HashSet, fmt};

use rust_decimal::Decimal;
use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::error::{RenderError, Result};

/// Ordered mapping from currency code to its rate in roubles.
///
/// Entries keep the order in which they appear in the source document and
/// codes are unique. Rates are exact decimals, so `"2.005"` stays `2.005`
/// rather than the nearest binary float.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyRates(Vec<(String, Decimal)>);

impl CurrencyRates {
    /// Builds rates from `(code, rate)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidNumericInput` if a code appears twice
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut rates = Self::default();
        for (code, rate) in pairs {
            rates.insert(code.into(), rate).map_err(|code| {
                RenderError::invalid_input("currency_rates")
                    .with_reason(format!("duplicate currency code '{code}'"))
            })?;
        }
        Ok(rates)
    }

    /// Appends a rate, handing the code back if it is already present.
    fn insert(&mut self, code: String, rate: Decimal) -> std::result::Result<(), String> {
        if self.0.iter().any(|(existing, _)| *existing == code) {
            return Err(code);
        }
        self.0.push((code, rate));
        Ok(())
    }

    /// Looks up the rate for a currency code.
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.0
            .iter()
            .find(|(existing, _)| existing == code)
            .map(|(_, rate)| *rate)
    }

    /// Iterates over `(code, rate)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.0.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self.0.iter().find(|(_, rate)| rate.is_sign_negative() && !rate.is_zero()) {
            Some((code, rate)) => Err(RenderError::invalid_input(format!("currency_rates.{code}"))
                .with_reason(format!("rate {rate} is negative"))),
            None => Ok(()),
        }
    }
}

impl Serialize for CurrencyRates {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, rate) in &self.0 {
            map.serialize_entry(code, rate)?;
        }
        map.end()
    }
}

struct RatesVisitor;

impl<'de> Visitor<'de> for RatesVisitor {
    type Value = CurrencyRates;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of currency codes to decimal rates")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> std::result::Result<Self::Value, M::Error> {
        let mut rates = CurrencyRates(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        let mut seen = HashSet::new();
        while let Some((code, rate)) = access.next_entry::<String, Decimal>()? {
            if !seen.insert(code.clone()) {
                return Err(de::Error::custom(format!("duplicate currency code '{code}'")));
            }
            rates.0.push((code, rate));
        }
        Ok(rates)
    }
}

impl<'de> Deserialize<'de> for CurrencyRates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RatesVisitor)
    }
}
