//! Static city → coordinate table and city-name normalization.
//!
//! The table is fixed at compile time and shared read-only across all
//! concurrent requests, so no synchronization is needed.

use crate::model::CityCoordinates;

/// Every city the webhook knows about. Keys are stored pre-normalized
/// (lowercase, unaccented), so a successful `normalize_city` output can be
/// matched with a plain equality check.
pub static CITY_COORDINATES: &[CityCoordinates] = &[
    CityCoordinates { name: "madrid", latitude: 40.4168, longitude: -3.7038 },
    CityCoordinates { name: "barcelona", latitude: 41.3851, longitude: 2.1734 },
    CityCoordinates { name: "valencia", latitude: 39.4699, longitude: -0.3763 },
    CityCoordinates { name: "bilbao", latitude: 43.2627, longitude: -2.9355 },
    CityCoordinates { name: "sevilla", latitude: 37.3891, longitude: -5.9845 },
    CityCoordinates { name: "paris", latitude: 48.8566, longitude: 2.3522 },
    CityCoordinates { name: "london", latitude: 51.5074, longitude: -0.1278 },
    CityCoordinates { name: "berlin", latitude: 52.5200, longitude: 13.4050 },
    CityCoordinates { name: "amsterdam", latitude: 52.3676, longitude: 4.9041 },
    CityCoordinates { name: "rome", latitude: 41.9028, longitude: 12.4964 },
    CityCoordinates { name: "newyork", latitude: 40.7128, longitude: -74.0060 },
    CityCoordinates { name: "losangeles", latitude: 34.0522, longitude: -118.2437 },
    CityCoordinates { name: "chicago", latitude: 41.8781, longitude: -87.6298 },
    CityCoordinates { name: "tokyo", latitude: 35.6762, longitude: 139.6503 },
    CityCoordinates { name: "kyiv", latitude: 50.45466, longitude: 30.5238 },
    CityCoordinates { name: "kiev", latitude: 50.45466, longitude: 30.5238 },
    CityCoordinates { name: "sydney", latitude: -33.8688, longitude: 151.2093 },
    CityCoordinates { name: "toronto", latitude: 43.6532, longitude: -79.3832 },
    CityCoordinates { name: "mexico", latitude: 19.4326, longitude: -99.1332 },
    CityCoordinates { name: "dubai", latitude: 25.2048, longitude: 55.2708 },
    CityCoordinates { name: "singapour", latitude: 1.3521, longitude: 103.8198 },
];

/// Lowercase a city name and fold the five accented Spanish vowels to their
/// ASCII equivalents. Nothing else is touched: no trimming, no punctuation
/// removal, and other diacritics (ñ, ü, ç) pass through unchanged — the
/// coordinate table contains no keys that would need them.
pub fn normalize_city(city: &str) -> String {
    city.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Look up a normalized city name. Exact match only.
pub fn lookup(normalized: &str) -> Option<&'static CityCoordinates> {
    CITY_COORDINATES.iter().find(|c| c.name == normalized)
}
