//! WMO weather-code descriptions, bilingual (Russian / Spanish).
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// Map a WMO weather code to its user-facing description. Codes outside the
/// table collapse to a fixed "unknown" placeholder.
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Ясно ☀️ / Despejado ☀️",
        1..=3 => "Облачно ☁️ / Nublado ☁️",
        45 | 48 => "Туман 🌫️ / Niebla 🌫️",
        51 | 53 | 55 | 61 | 63 | 65 => "Дождь 🌧️ / Lluvia 🌧️",
        71 | 73 | 75 => "Снег 🌨️ / Nieve 🌨️",
        80..=82 => "Ливни 🌧️ / Aguaceros 🌧️",
        95 | 96 | 99 => "Гроза ⛈️ / Tormenta ⛈️",
        _ => "Desconocido",
    }
}
