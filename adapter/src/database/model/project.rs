use kernel::model::{
    id::{ProjectId, ProviderId},
    project::{Project, ProjectCategory, ProjectRole},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ProjectRow {
    pub project_id: ProjectId,
    pub owner_id: ProviderId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub role: String,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = AppError;

    fn try_from(value: ProjectRow) -> Result<Self, Self::Error> {
        let ProjectRow {
            project_id,
            owner_id,
            title,
            description,
            category,
            role,
            tech_stack,
            repo_url,
            demo_url,
            created_at,
            updated_at,
        } = value;
        let category = category.parse::<ProjectCategory>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "project {project_id} has unknown category `{category}`"
            ))
        })?;
        let role = role.parse::<ProjectRole>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "project {project_id} has unknown role `{role}`"
            ))
        })?;
        Ok(Project {
            project_id,
            owner_id,
            title,
            description,
            category,
            role,
            tech_stack,
            repo_url,
            demo_url,
            created_at,
            updated_at,
        })
    }
}
