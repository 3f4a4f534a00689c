use crate::model::provider::{
    ProviderListQuery, ProviderResponse, ProvidersResponse, UpsertProfileRequest,
    UpsertProfileRequestWithId,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::ProviderId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_provider_list(
    Query(query): Query<ProviderListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProvidersResponse>> {
    query.validate()?;

    registry
        .profile_repository()
        .find_all(query.into())
        .await
        .map(ProvidersResponse::from)
        .map(Json)
}

pub async fn show_provider(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProviderResponse>> {
    registry
        .profile_repository()
        .find_by_id(&provider_id)
        .await
        .and_then(|profile| match profile {
            Some(profile) => Ok(Json(profile.into())),
            None => Err(AppError::EntityNotFound(format!(
                "Provider {provider_id} does not exist"
            ))),
        })
}

pub async fn upsert_provider(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpsertProfileRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .profile_repository()
        .upsert(UpsertProfileRequestWithId(provider_id, req).into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_provider(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .profile_repository()
        .delete(&provider_id)
        .await
        .map(|_| StatusCode::OK)
}
