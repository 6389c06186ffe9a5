//! Fulfillment text formatting.

use crate::codes;
use crate::model::CurrentConditions;

/// Build the multi-line fulfillment text for one city.
///
/// `city` is echoed exactly as the caller supplied it (not normalized).
/// Temperature keeps its default numeric formatting, wind speed is rounded
/// to one decimal place, humidity is an integer percentage.
pub fn fulfillment_text(city: &str, conditions: &CurrentConditions) -> String {
    let weather_desc = codes::describe(conditions.weather_code);

    format!(
        "En {city}:\n\
         🌡️ Temperatura: {temperature}°C\n\
         {weather_desc}\n\
         💨 Viento: {wind_speed:.1} km/h\n\
         💧 Humedad: {humidity}%",
        temperature = conditions.temperature_c,
        wind_speed = conditions.wind_speed_kmh,
        humidity = conditions.relative_humidity_pct,
    )
}
