use crate::model::notification::Notification;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, notification: Notification) -> AppResult<()>;
}
