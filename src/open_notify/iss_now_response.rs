use crate::domain::GeoPosition;
use serde::Deserialize;

/// Payload of `GET /iss-now.json`.
#[derive(Debug, Deserialize, PartialEq)]
pub struct IssNowResponse {
    pub message: String,
    pub timestamp: i64,
    pub iss_position: IssPosition,
}

/// The API transmits both coordinates as strings.
#[derive(Debug, Deserialize, PartialEq)]
pub struct IssPosition {
    pub latitude: String,
    pub longitude: String,
}

impl IssPosition {
    /// A coordinate that fails to parse as a float becomes 0.0, so a bad
    /// payload yields a plausible-looking position near (0,0) rather than an
    /// error.
    pub fn position(&self) -> GeoPosition {
        GeoPosition {
            latitude: self.latitude.parse().unwrap_or(0.0),
            longitude: self.longitude.parse().unwrap_or(0.0),
        }
    }
}
