use crate::model::{
    id::{ProjectId, ProviderId},
    project::{
        event::{CreateProject, UpdateProject},
        Project,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, event: CreateProject) -> AppResult<ProjectId>;
    // Fails with EntityNotFound for an unknown project
    async fn update(&self, event: UpdateProject) -> AppResult<()>;
    async fn find_by_owner(&self, owner_id: &ProviderId) -> AppResult<Vec<Project>>;
    async fn find_all(&self) -> AppResult<Vec<Project>>;
}
