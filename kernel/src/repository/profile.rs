use crate::model::{
    id::ProviderId,
    provider::{event::UpsertProfile, ProfileFilter, ProviderProfile},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn upsert(&self, event: UpsertProfile) -> AppResult<()>;
    async fn find_by_id(&self, provider_id: &ProviderId) -> AppResult<Option<ProviderProfile>>;
    async fn find_all(&self, filter: ProfileFilter) -> AppResult<Vec<ProviderProfile>>;
    async fn delete(&self, provider_id: &ProviderId) -> AppResult<()>;
}
