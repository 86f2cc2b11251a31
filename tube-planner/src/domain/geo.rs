//! Geographic coordinates.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point given by latitude and longitude in decimal degrees.
///
/// Negative latitude is south, negative longitude is west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Distance to another point in kilometres.
    ///
    /// Uses the equirectangular approximation, which is close enough to
    /// the haversine distance at the spacing of adjacent stations.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let mean_lat = (0.5 * (self.lat + other.lat)).to_radians();
        let x = (other.lon - self.lon).to_radians() * mean_lat.cos();
        let y = (other.lat - self.lat).to_radians();
        EARTH_RADIUS_KM * (x * x + y * y).sqrt()
    }
}
