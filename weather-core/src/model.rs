use serde::{Deserialize, Serialize};

/// One entry of the static coordinate table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityCoordinates {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at one location, as reported by the provider.
/// Derived per request; nothing outlives the request that fetched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub relative_humidity_pct: u8,
    pub weather_code: u16,
}
