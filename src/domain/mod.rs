pub mod ambient;
pub mod dispatcher;
pub mod events;
pub mod location_provider;
mod geo_position;
mod notification;
mod position_fix;

pub use geo_position::GeoPosition;
pub use notification::NotificationEvent;
pub use position_fix::PositionFix;
