use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Where new posts and the feed viewport land when geolocation is denied or
/// unavailable.
pub const FALLBACK_LOCATION: Coordinates = Coordinates::new(37.0965, -113.5654);

/// Fallback center for the map screen when its route parameters do not parse.
pub const MAP_FALLBACK_LOCATION: Coordinates = Coordinates::new(37.0965, -113.5684);
