use crate::model::CurrentConditions;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Abstraction over the upstream weather data source.
///
/// The webhook holds this as a trait object so tests can substitute a stub
/// without touching the network.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a coordinate pair.
    async fn current(&self, latitude: f64, longitude: f64) -> anyhow::Result<CurrentConditions>;
}
