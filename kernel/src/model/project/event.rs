use crate::model::{
    id::{ProjectId, ProviderId},
    project::{ProjectCategory, ProjectRole},
};

#[derive(Debug)]
pub struct CreateProject {
    pub owner_id: ProviderId,
    pub title: String,
    pub description: Option<String>,
    pub category: ProjectCategory,
    pub role: ProjectRole,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
}

/// Partial update: `None` leaves the stored value as it is.
#[derive(Debug, Default)]
pub struct UpdateProject {
    pub project_id: ProjectId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProjectCategory>,
    pub role: Option<ProjectRole>,
    pub tech_stack: Option<Vec<String>>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
}
