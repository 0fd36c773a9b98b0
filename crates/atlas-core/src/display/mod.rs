//! Display wrappers for the field groups of a location-info record.
//!
//! Each field group of the report has its own newtype wrapper implementing
//! [`std::fmt::Display`], so the formatting rules can be tested in isolation
//! and composed by [`crate::Renderer`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  LocationInfo   │    │ Display Wrapper │    │  Table of text  │
//! │  (models)       │───▶│    Types        │───▶│     lines       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Languages and the numbered news block
//! - [`numbers`]: Population, money, exchange rates, measurements
//! - [`datetime`]: `UTC±HH:MM` parsing and local time
//! - [`table`]: Plain-text table layout
//!
//! ## Usage Examples
//!
//! ```rust
//! use atlas_core::display::{OffsetSign, LocalTime, Population};
//! use jiff::Timestamp;
//!
//! assert_eq!(Population(1234567).to_string(), "1.234.567");
//!
//! let at: Timestamp = "2023-01-01T10:00:00Z".parse().unwrap();
//! let local = LocalTime::at(at, "UTC+03:00", OffsetSign::Ignore).unwrap();
//! assert_eq!(local.to_string(), "13:00:00");
//! ```

pub mod collections;
pub mod datetime;
pub mod numbers;
pub mod table;

pub use collections::{Languages, NewsBlock};
pub use datetime::{LocalTime, OffsetSign, UtcOffset};
pub use numbers::{Coordinates, Measure, Money, Population, Rates};
pub use table::Table;
