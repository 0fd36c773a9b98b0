//! Current weather conditions at the capital.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// A measurement supplied either as a bare number or as text with a unit.
///
/// Collectors disagree on whether wind speed and visibility come with units
/// attached, so both shapes are accepted and rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(value) => write!(f, "{value}"),
            Reading::Text(text) => f.write_str(text),
        }
    }
}

/// Weather snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Weather {
    /// Air temperature in degrees Celsius
    pub temp: f64,

    pub description: String,

    pub wind_speed: Reading,

    pub visibility: Reading,
}

impl Weather {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.temp.is_finite() {
            Ok(())
        } else {
            Err(RenderError::invalid_input("weather.temp").with_reason("temperature is not a number"))
        }
    }
}
