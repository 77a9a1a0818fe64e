use crate::domain::GeoPosition;
use chrono::{DateTime, Utc};

/// A successfully fetched ISS position and the moment it was fetched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionFix {
    pub position: GeoPosition,
    pub fetched_at: DateTime<Utc>,
}
