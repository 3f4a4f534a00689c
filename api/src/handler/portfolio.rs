use crate::model::portfolio::{
    PortfolioResponse, UpsertPortfolioRequest, UpsertPortfolioRequestWithOwner,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::ProviderId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_portfolio(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PortfolioResponse>> {
    registry
        .portfolio_repository()
        .find_by_owner(&provider_id)
        .await
        .and_then(|portfolio| match portfolio {
            Some(portfolio) => Ok(Json(portfolio.into())),
            None => Err(AppError::EntityNotFound(format!(
                "Provider {provider_id} has no portfolio"
            ))),
        })
}

pub async fn upsert_portfolio(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpsertPortfolioRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .portfolio_repository()
        .upsert(UpsertPortfolioRequestWithOwner(provider_id, req).into())
        .await
        .map(|_| StatusCode::OK)
}
