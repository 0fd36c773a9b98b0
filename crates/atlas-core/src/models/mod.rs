//! Data models for the location-info record.
//!
//! This module contains the input record rendered by [`crate::Renderer`]: a
//! country with its geography, the current weather, exchange rates and a
//! handful of news items, all captured at a single instant. The record is
//! produced by external collectors and arrives as JSON; it is read-only for
//! the whole rendering pass.
//!
//! Display implementations for the individual field groups live in
//! [`crate::display`] so that the data structures stay free of presentation
//! rules.
//!
//! # Examples
//!
//! ```rust
//! use atlas_core::models::LocationInfo;
//!
//! let json = r#"{
//!     "location": {
//!         "name": "Russia", "capital": "Moscow", "subregion": "Eastern Europe",
//!         "population": 144104080, "area": 17098242.0,
//!         "latitude": 60.0, "longitude": 100.0,
//!         "timezones": ["UTC+03:00"],
//!         "languages": [{"name": "Russian", "native_name": "Русский"}]
//!     },
//!     "weather": {"temp": -3.5, "description": "overcast clouds",
//!                 "wind_speed": 4.2, "visibility": 10000},
//!     "currency_rates": {"USD": "92.5123"},
//!     "news": [{"title": "Headline"}],
//!     "timestamp": "2023-01-01T10:00:00Z"
//! }"#;
//!
//! let info = LocationInfo::from_json_str(json).unwrap();
//! assert_eq!(info.location.capital, "Moscow");
//! ```

pub mod currency;
pub mod info;
pub mod location;
pub mod news;
pub mod weather;


pub use currency::CurrencyRates;
pub use info::LocationInfo;
pub use location::{Language, Location};
pub use news::NewsItem;
pub use weather::{Reading, Weather};
