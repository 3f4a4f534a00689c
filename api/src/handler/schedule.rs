use crate::model::schedule::{
    AvailabilityNowResponse, AvailabilityQuery, AvailabilityResponse, ScheduleResponse,
    ScheduleSlotPayload, UpdateScheduleRequest, UpdateScheduleRequestWithId,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use garde::Validate;
use kernel::model::{
    id::ProviderId,
    schedule::{
        availability::{is_available_now, next_available_slot},
        ScheduleSlot,
    },
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_schedule(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ScheduleResponse>> {
    let schedule = registry
        .schedule_repository()
        .find_by_provider_id(&provider_id)
        .await?;

    Ok(Json(match schedule {
        Some(schedule) => schedule.into(),
        None => ScheduleResponse::empty(provider_id),
    }))
}

pub async fn update_schedule(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateScheduleRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .schedule_repository()
        .upsert(UpdateScheduleRequestWithId(provider_id, req).into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn check_availability(
    Path(provider_id): Path<ProviderId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    let slots = slots_of(&registry, &provider_id).await?;

    Ok(Json(AvailabilityResponse::evaluate(&slots, query)))
}

// Evaluated against the server's local wall clock.
pub async fn check_availability_now(
    Path(provider_id): Path<ProviderId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityNowResponse>> {
    let slots = slots_of(&registry, &provider_id).await?;
    let now = Local::now().naive_local();

    Ok(Json(AvailabilityNowResponse {
        available_now: is_available_now(&slots, now),
        next_slot: next_available_slot(&slots, now)
            .cloned()
            .map(ScheduleSlotPayload::from),
    }))
}

async fn slots_of(registry: &AppRegistry, provider_id: &ProviderId) -> AppResult<Vec<ScheduleSlot>> {
    Ok(registry
        .schedule_repository()
        .find_by_provider_id(provider_id)
        .await?
        .map(|schedule| schedule.slots)
        .unwrap_or_default())
}
