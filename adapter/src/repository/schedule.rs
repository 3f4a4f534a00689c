use crate::database::{model::schedule::ScheduleRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ProviderId,
    schedule::{event::UpsertSchedule, Schedule},
};
use kernel::repository::schedule::ScheduleRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

#[derive(new)]
pub struct ScheduleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    // the whole weekly list is replaced at once
    async fn upsert(&self, event: UpsertSchedule) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO provider_schedules (provider_id, slots, updated_at)
                VALUES ($1, $2, NOW())
                ON CONFLICT (provider_id)
                DO UPDATE SET slots = EXCLUDED.slots, updated_at = NOW()
            "#,
        )
        .bind(event.provider_id)
        .bind(Json(event.slots))
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_by_provider_id(&self, provider_id: &ProviderId) -> AppResult<Option<Schedule>> {
        sqlx::query_as::<_, ScheduleRow>(
            r#"
                SELECT provider_id, slots
                FROM provider_schedules
                WHERE provider_id = $1
            "#,
        )
        .bind(provider_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Schedule::from))
        .map_err(AppError::SpecificOperationError)
    }
}
