use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ProjectId, ProviderId},
    project::{
        event::{CreateProject, UpdateProject},
        Project, ProjectCategory, ProjectRole,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[garde(length(min = 1, max = 200))]
    pub title: String,
    #[garde(length(max = 2000))]
    pub description: Option<String>,
    #[garde(skip)]
    pub category: ProjectCategory,
    #[garde(skip)]
    pub role: ProjectRole,
    #[serde(default)]
    #[garde(inner(length(min = 1)))]
    pub tech_stack: Vec<String>,
    #[garde(url)]
    pub repo_url: Option<String>,
    #[garde(url)]
    pub demo_url: Option<String>,
}

pub struct CreateProjectRequestWithOwner(pub ProviderId, pub CreateProjectRequest);

impl From<CreateProjectRequestWithOwner> for CreateProject {
    fn from(value: CreateProjectRequestWithOwner) -> Self {
        let CreateProjectRequestWithOwner(
            owner_id,
            CreateProjectRequest {
                title,
                description,
                category,
                role,
                tech_stack,
                repo_url,
                demo_url,
            },
        ) = value;
        CreateProject {
            owner_id,
            title,
            description,
            category,
            role,
            tech_stack,
            repo_url,
            demo_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[garde(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[garde(length(max = 2000))]
    pub description: Option<String>,
    #[garde(skip)]
    pub category: Option<ProjectCategory>,
    #[garde(skip)]
    pub role: Option<ProjectRole>,
    #[garde(inner(inner(length(min = 1))))]
    pub tech_stack: Option<Vec<String>>,
    #[garde(url)]
    pub repo_url: Option<String>,
    #[garde(url)]
    pub demo_url: Option<String>,
}

pub struct UpdateProjectRequestWithId(pub ProjectId, pub UpdateProjectRequest);

impl From<UpdateProjectRequestWithId> for UpdateProject {
    fn from(value: UpdateProjectRequestWithId) -> Self {
        let UpdateProjectRequestWithId(
            project_id,
            UpdateProjectRequest {
                title,
                description,
                category,
                role,
                tech_stack,
                repo_url,
                demo_url,
            },
        ) = value;
        UpdateProject {
            project_id,
            title,
            description,
            category,
            role,
            tech_stack,
            repo_url,
            demo_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreatedResponse {
    pub project_id: ProjectId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub project_id: ProjectId,
    pub owner_id: ProviderId,
    pub title: String,
    pub description: Option<String>,
    pub category: ProjectCategory,
    pub role: ProjectRole,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(value: Project) -> Self {
        let Project {
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
        Self {
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
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub items: Vec<ProjectResponse>,
}

impl From<Vec<Project>> for ProjectsResponse {
    fn from(value: Vec<Project>) -> Self {
        Self {
            items: value.into_iter().map(ProjectResponse::from).collect(),
        }
    }
}
