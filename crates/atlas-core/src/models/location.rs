//! Geographic description of a country.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// A language spoken in the country, with its self-designation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Language {
    /// English name of the language
    pub name: String,

    /// Name of the language in the language itself
    pub native_name: String,
}

impl Language {
    pub fn new(name: impl Into<String>, native_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_name: native_name.into(),
        }
    }
}

/// Country-level geographic data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Location {
    /// Common name of the country
    pub name: String,

    pub capital: String,

    pub subregion: String,

    /// Number of inhabitants
    pub population: u64,

    /// Area in square kilometres
    pub area: f64,

    pub latitude: f64,

    pub longitude: f64,

    /// Timezone descriptors formatted as `UTC±HH:MM`; only the first is used
    pub timezones: Vec<String>,

    /// Official languages in source order
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Location {
    /// Returns the timezone descriptor used for local time.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MissingTimezone` if the list is empty
    pub fn primary_timezone(&self) -> Result<&str> {
        let (first, rest) = self
            .timezones
            .split_first()
            .ok_or(RenderError::MissingTimezone)?;
        if !rest.is_empty() {
            warn!(
                "{} carries {} timezones, only '{first}' is used",
                self.name,
                self.timezones.len()
            );
        }
        Ok(first.as_str())
    }

    /// Checks that area and coordinates are physically meaningful.
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(RenderError::invalid_input("location.area")
                .with_reason(format!("expected a non-negative number, got {}", self.area)));
        }
        check_range("location.latitude", self.latitude, 90.0)?;
        check_range("location.longitude", self.longitude, 180.0)?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, limit: f64) -> Result<()> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(RenderError::invalid_input(field)
            .with_reason(format!("{value} is outside [-{limit}, {limit}]")))
    }
}
