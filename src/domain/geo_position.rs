use std::f64::consts::PI;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = PI / 180.0;

/// A point on the Earth's surface in degrees.
///
/// Latitude is degrees north (-90 to 90), longitude degrees east (-180 to 180).
/// Upstream coordinates that fail to parse arrive as 0.0 and are kept as-is.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// Great-circle distance to `other` in meters, using the haversine formula
    /// on a spherical Earth.
    pub fn distance_m(&self, other: &GeoPosition) -> f64 {
        let lat1_rad = self.latitude * DEG_TO_RAD;
        let lat2_rad = other.latitude * DEG_TO_RAD;
        let delta_lat = (other.latitude - self.latitude) * DEG_TO_RAD;
        let delta_lon = (other.longitude - self.longitude) * DEG_TO_RAD;

        let a = (delta_lat / 2.0).sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_M * c
    }
}
