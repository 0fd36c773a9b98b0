//! The aggregated location-info record and its loaders.

use std::{fs::File, io::Read, path::Path};

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{CurrencyRates, Location, NewsItem, Weather};
use crate::error::{RenderError, Result};

/// Everything known about a place at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct LocationInfo {
    pub location: Location,

    pub weather: Weather,

    /// Rates in roubles, keyed by currency code, in source order
    #[serde(default)]
    #[cfg_attr(
        feature = "schema",
        schemars(with = "std::collections::BTreeMap<String, String>")
    )]
    pub currency_rates: CurrencyRates,

    #[serde(default)]
    pub news: Vec<NewsItem>,

    /// Instant the data was collected (UTC), base for local time
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub timestamp: Timestamp,
}

impl LocationInfo {
    /// Checks the numeric invariants the renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidNumericInput` for a negative area or rate,
    /// coordinates out of range or a non-finite temperature, and
    /// `RenderError::MissingTimezone` if the location has no timezone
    pub fn validate(&self) -> Result<()> {
        self.location.validate()?;
        self.weather.validate()?;
        self.currency_rates.validate()?;
        if self.location.timezones.is_empty() {
            return Err(RenderError::MissingTimezone);
        }
        Ok(())
    }

    /// Parses and validates a record from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let info: Self = serde_json::from_str(json)?;
        info.validate()?;
        Ok(info)
    }

    /// Parses and validates a record from any reader, e.g. stdin.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let info: Self = serde_json::from_reader(reader)?;
        info.validate()?;
        Ok(info)
    }

    /// Parses and validates a record stored in a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::FileSystem` if the file cannot be opened
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading location info from {}", path.display());
        let file = File::open(path).map_err(|e| RenderError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
