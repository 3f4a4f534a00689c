use crate::database::{model::profile::ProfileRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ProviderId,
    provider::{event::UpsertProfile, ProfileFilter, ProviderProfile},
};
use kernel::repository::profile::ProfileRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

const SELECT_PROFILES: &str = r#"
    SELECT
        provider_id, display_name, last_name, email, specialty,
        bio, quote, location, role, photo_url, skills, socials, stats
    FROM provider_profiles
"#;

#[derive(new)]
pub struct ProfileRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn upsert(&self, event: UpsertProfile) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO provider_profiles
                (provider_id, display_name, last_name, email, specialty,
                bio, quote, location, role, photo_url, skills, socials, stats)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                ON CONFLICT (provider_id) DO UPDATE SET
                    display_name = EXCLUDED.display_name,
                    last_name = EXCLUDED.last_name,
                    email = EXCLUDED.email,
                    specialty = EXCLUDED.specialty,
                    bio = EXCLUDED.bio,
                    quote = EXCLUDED.quote,
                    location = EXCLUDED.location,
                    role = EXCLUDED.role,
                    photo_url = EXCLUDED.photo_url,
                    skills = EXCLUDED.skills,
                    socials = EXCLUDED.socials,
                    stats = EXCLUDED.stats,
                    updated_at = NOW()
            "#,
        )
        .bind(event.provider_id)
        .bind(event.display_name)
        .bind(event.last_name)
        .bind(event.email)
        .bind(event.specialty)
        .bind(event.bio)
        .bind(event.quote)
        .bind(event.location)
        .bind(event.role.as_ref())
        .bind(event.photo_url)
        .bind(event.skills)
        .bind(Json(event.socials))
        .bind(event.stats.map(Json))
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_by_id(&self, provider_id: &ProviderId) -> AppResult<Option<ProviderProfile>> {
        sqlx::query_as::<_, ProfileRow>(&format!("{SELECT_PROFILES} WHERE provider_id = $1"))
            .bind(provider_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(ProviderProfile::try_from)
            .transpose()
    }

    async fn find_all(&self, filter: ProfileFilter) -> AppResult<Vec<ProviderProfile>> {
        // a NULL role matches every profile
        sqlx::query_as::<_, ProfileRow>(&format!(
            "{SELECT_PROFILES} WHERE $1::TEXT IS NULL OR role = $1 ORDER BY display_name ASC"
        ))
        .bind(filter.role.map(|role| role.as_ref().to_string()))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(ProviderProfile::try_from)
        .collect()
    }

    // The schedule goes together with the profile.
    async fn delete(&self, provider_id: &ProviderId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let res = sqlx::query("DELETE FROM provider_profiles WHERE provider_id = $1")
            .bind(provider_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Provider {provider_id} does not exist"
            )));
        }

        sqlx::query("DELETE FROM provider_schedules WHERE provider_id = $1")
            .bind(provider_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
