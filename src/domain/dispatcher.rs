use crate::domain::NotificationEvent;
use async_trait::async_trait;
use std::fmt::Debug;

/// Hands notifications to whatever surfaces them to the user, e.g. an OS
/// notification center. Fire-and-forget, no delivery confirmation.
#[async_trait]
pub trait NotificationDispatcher: Debug + Send + Sync {
    async fn dispatch(&self, event: NotificationEvent);
}
