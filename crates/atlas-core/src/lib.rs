//! Core library for the Atlas location report.
//!
//! This crate turns a pre-aggregated location-info record (country facts,
//! weather, exchange rates and news collected elsewhere) into a two-column
//! plain-text table. It performs no I/O beyond loading the record and the
//! optional configuration file.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): The input record, deserialized from JSON
//!   and validated before use
//! - **Display Wrappers** ([`display`]): One formatter per field group plus
//!   the table layout
//! - **Renderer** ([`Renderer`]): Selects the fields, applies the formatters
//!   and lays out the table
//!
//! # Quick Start
//!
//! ```rust
//! use atlas_core::{LocationInfo, Renderer};
//!
//! # fn example() -> atlas_core::Result<()> {
//! let info = LocationInfo::from_json_str(r#"{
//!     "location": {
//!         "name": "Spain", "capital": "Madrid", "subregion": "Southern Europe",
//!         "population": 47351567, "area": 505992.0,
//!         "latitude": 40.0, "longitude": -4.0,
//!         "timezones": ["UTC+01:00"],
//!         "languages": [{"name": "Spanish", "native_name": "Español"}]
//!     },
//!     "weather": {"temp": 21.5, "description": "clear sky",
//!                 "wind_speed": "3.1 m/s", "visibility": "10000 m"},
//!     "currency_rates": {"EUR": "99.875"},
//!     "news": [],
//!     "timestamp": "2023-01-01T10:00:00Z"
//! }"#)?;
//!
//! let lines = Renderer::new(&info).render()?;
//! assert!(lines.iter().any(|line| line.contains("11:00:00 (UTC+01:00)")));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod renderer;

// Re-export commonly used types
pub use config::Config;
pub use display::{OffsetSign, Table};
pub use error::{RenderError, Result};
pub use models::{CurrencyRates, Language, Location, LocationInfo, NewsItem, Reading, Weather};
pub use renderer::{RenderOptions, Renderer, HEADERS};
