use crate::model::advisory::{
    AdvisoriesResponse, AdvisoryCreatedResponse, AdvisoryResponse, CreateAdvisoryRequest,
    ProviderAdvisoriesQuery, UpdateAdvisoryStatusRequest,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{AdvisoryId, ProviderId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_advisory(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAdvisoryRequest>,
) -> AppResult<(StatusCode, Json<AdvisoryCreatedResponse>)> {
    req.validate()?;

    registry
        .advisory_service()
        .create(req.into())
        .await
        .map(|advisory_id| (StatusCode::CREATED, Json(AdvisoryCreatedResponse { advisory_id })))
}

pub async fn show_advisory_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdvisoriesResponse>> {
    registry
        .advisory_service()
        .list_all()
        .await
        .map(AdvisoriesResponse::from)
        .map(Json)
}

pub async fn show_advisory(
    Path(advisory_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdvisoryResponse>> {
    let advisory_id = parse_advisory_id(&advisory_id)?;
    registry
        .advisory_repository()
        .find_by_id(advisory_id)
        .await
        .and_then(|advisory| match advisory {
            Some(advisory) => Ok(Json(advisory.into())),
            None => Err(AppError::EntityNotFound(format!(
                "Advisory {advisory_id} does not exist"
            ))),
        })
}

pub async fn update_advisory_status(
    Path(advisory_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateAdvisoryStatusRequest>,
) -> AppResult<StatusCode> {
    let advisory_id = parse_advisory_id(&advisory_id)?;
    req.validate()?;

    let UpdateAdvisoryStatusRequest {
        status,
        response_message,
    } = req;
    registry
        .advisory_service()
        .transition(advisory_id, status, response_message)
        .await
        .map(|_| StatusCode::OK)
}

/// Without `?email=` the provider's profile email is used, when there is one.
pub async fn show_provider_advisories(
    Path(provider_id): Path<ProviderId>,
    Query(query): Query<ProviderAdvisoriesQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdvisoriesResponse>> {
    query.validate()?;

    let email = match query.email {
        Some(email) => Some(email),
        None => registry
            .profile_repository()
            .find_by_id(&provider_id)
            .await?
            .map(|profile| profile.email),
    };

    registry
        .advisory_service()
        .list_for_provider(&provider_id, email.as_deref())
        .await
        .map(AdvisoriesResponse::from)
        .map(Json)
}

// No advisory can live under an id that is not one of ours.
fn parse_advisory_id(raw: &str) -> AppResult<AdvisoryId> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("Advisory {raw} does not exist")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_shapes_are_not_found() {
        for raw in ["nonexistent-id", "", "123"] {
            assert!(matches!(
                parse_advisory_id(raw),
                Err(AppError::EntityNotFound(_))
            ));
        }
    }

    #[test]
    fn issued_ids_parse() {
        let id = AdvisoryId::new();
        assert_eq!(parse_advisory_id(&id.to_string()).unwrap(), id);
    }
}
