//! Core library for the weather fulfillment webhook.
//!
//! This crate defines:
//! - The static city coordinate table and city-name normalization
//! - The WMO weather-code description table
//! - Abstraction over the weather provider (Open-Meteo)
//! - Fulfillment text formatting
//!
//! It is used by `weather-webhook`, but can also be reused by other binaries or services.

pub mod codes;
pub mod format;
pub mod geo;
pub mod model;
pub mod provider;

pub use geo::{lookup, normalize_city};
pub use model::{CityCoordinates, CurrentConditions};
pub use provider::WeatherProvider;
