//! Local time display utilities.
//!
//! Timezones arrive as `UTC±HH:MM` descriptors rather than IANA names, so the
//! local time is derived by shifting the collection instant by the parsed
//! offset and printing the wall-clock part.

use std::{fmt, str::FromStr, sync::LazyLock};

use jiff::{SignedDuration, Timestamp};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

static UTC_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"UTC([+-])([0-9]{2}):([0-9]{2})").expect("UTC offset pattern is valid")
});

/// How the sign of a `UTC±HH:MM` descriptor is applied.
///
/// Historically the sign was parsed and then dropped, so `UTC-05:00` shifted
/// the clock forward by five hours. `Ignore` keeps that output stable for
/// existing consumers; `Honor` produces the correct local time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OffsetSign {
    /// Always add the offset magnitude
    #[default]
    Ignore,

    /// Subtract the magnitude for negative offsets
    Honor,
}

impl FromStr for OffsetSign {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(OffsetSign::Ignore),
            "honor" => Ok(OffsetSign::Honor),
            _ => Err(format!("Invalid offset sign policy: {s}")),
        }
    }
}

impl OffsetSign {
    /// Policy name as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetSign::Ignore => "ignore",
            OffsetSign::Honor => "honor",
        }
    }
}

/// A parsed `UTC±HH:MM` offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    pub negative: bool,
    pub hours: u32,
    pub minutes: u32,
}

impl UtcOffset {
    /// Extracts the first `UTC±HH:MM` occurrence from a timezone descriptor.
    ///
    /// Leading zeros are insignificant, so `UTC+03:00` yields three hours.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedTimezone` if no offset is found
    pub fn parse(tz: &str) -> Result<Self> {
        let caps = UTC_OFFSET
            .captures(tz)
            .ok_or_else(|| RenderError::malformed_timezone(tz))?;
        let component = |index: usize| {
            caps[index]
                .parse::<u32>()
                .map_err(|_| RenderError::malformed_timezone(tz))
        };

        Ok(Self {
            negative: &caps[1] == "-",
            hours: component(2)?,
            minutes: component(3)?,
        })
    }

    /// Converts the offset into a duration under the given sign policy.
    pub fn to_duration(self, sign: OffsetSign) -> SignedDuration {
        let seconds = i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60;
        match sign {
            OffsetSign::Honor if self.negative => SignedDuration::from_secs(-seconds),
            _ => SignedDuration::from_secs(seconds),
        }
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "UTC{sign}{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Wall-clock time at a location, displayed as `HH:MM:SS`.
///
/// The wrapped instant is already shifted by the location's offset; the
/// display prints its UTC clock reading in 24-hour format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime(pub Timestamp);

impl LocalTime {
    /// Computes the local time for `timestamp` in the timezone `tz`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedTimezone` if `tz` has no `UTC±HH:MM`
    /// offset, or `RenderError::TimeArithmetic` if the shifted instant is out
    /// of range
    pub fn at(timestamp: Timestamp, tz: &str, sign: OffsetSign) -> Result<Self> {
        let offset = UtcOffset::parse(tz)?;
        debug!("Parsed '{tz}' as {offset} (sign policy: {})", sign.as_str());
        timestamp
            .checked_add(offset.to_duration(sign))
            .map(Self)
            .map_err(|source| RenderError::TimeArithmetic { source })
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M:%S"))
    }
}
