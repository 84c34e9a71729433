use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for String {
    // OpenRouteService expects longitude before latitude.
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.longitude, coordinates.latitude)
    }
}
