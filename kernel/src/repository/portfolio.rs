use crate::model::{
    id::ProviderId,
    portfolio::{event::UpsertPortfolio, Portfolio},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn upsert(&self, event: UpsertPortfolio) -> AppResult<()>;
    async fn find_by_owner(&self, owner_id: &ProviderId) -> AppResult<Option<Portfolio>>;
}
