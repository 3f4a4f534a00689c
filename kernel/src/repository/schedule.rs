use crate::model::{
    id::ProviderId,
    schedule::{event::UpsertSchedule, Schedule},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // Replaces every slot of the provider
    async fn upsert(&self, event: UpsertSchedule) -> AppResult<()>;
    async fn find_by_provider_id(&self, provider_id: &ProviderId) -> AppResult<Option<Schedule>>;
}
