use crate::model::project::{
    CreateProjectRequest, CreateProjectRequestWithOwner, ProjectCreatedResponse, ProjectsResponse,
    UpdateProjectRequest, UpdateProjectRequestWithId,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{ProjectId, ProviderId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_project_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProjectsResponse>> {
    registry
        .project_repository()
        .find_all()
        .await
        .map(ProjectsResponse::from)
        .map(Json)
}

pub async fn show_provider_projects(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProjectsResponse>> {
    registry
        .project_repository()
        .find_by_owner(&provider_id)
        .await
        .map(ProjectsResponse::from)
        .map(Json)
}

pub async fn create_project(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectCreatedResponse>)> {
    req.validate()?;

    registry
        .project_repository()
        .create(CreateProjectRequestWithOwner(provider_id, req).into())
        .await
        .map(|project_id| (StatusCode::CREATED, Json(ProjectCreatedResponse { project_id })))
}

pub async fn update_project(
    Path(project_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateProjectRequest>,
) -> AppResult<StatusCode> {
    let project_id = parse_project_id(&project_id)?;
    req.validate()?;

    registry
        .project_repository()
        .update(UpdateProjectRequestWithId(project_id, req).into())
        .await
        .map(|_| StatusCode::OK)
}

fn parse_project_id(raw: &str) -> AppResult<ProjectId> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("Project {raw} does not exist")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_project_ids_are_not_found() {
        for raw in ["nonexistent-id", "", "42"] {
            assert!(matches!(
                parse_project_id(raw),
                Err(AppError::EntityNotFound(_))
            ));
        }
    }

    #[test]
    fn issued_project_ids_parse() {
        let project_id = ProjectId::new();
        assert_eq!(parse_project_id(&project_id.to_string()).unwrap(), project_id);
    }
}
