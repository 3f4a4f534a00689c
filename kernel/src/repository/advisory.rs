use crate::model::{
    advisory::{
        event::{CreateAdvisory, UpdateAdvisoryStatus},
        Advisory, AdvisoryFilter,
    },
    id::AdvisoryId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AdvisoryRepository: Send + Sync {
    // Stores a new advisory in the pending state
    async fn create(&self, event: CreateAdvisory) -> AppResult<AdvisoryId>;
    async fn find_by_id(&self, advisory_id: AdvisoryId) -> AppResult<Option<Advisory>>;
    // Rows come back in store order
    async fn find_by(&self, filter: AdvisoryFilter) -> AppResult<Vec<Advisory>>;
    // Fails with ConflictError when the advisory is no longer pending
    async fn update_status(&self, event: UpdateAdvisoryStatus) -> AppResult<()>;
}
