use crate::database::{model::advisory::AdvisoryRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    advisory::{
        event::{CreateAdvisory, UpdateAdvisoryStatus},
        Advisory, AdvisoryFilter, AdvisoryStatus,
    },
    id::AdvisoryId,
};
use kernel::repository::advisory::AdvisoryRepository;
use shared::error::{AppError, AppResult};

const SELECT_ADVISORIES: &str = r#"
    SELECT
        advisory_id, programmer_id, programmer_email, programmer_name,
        requester_name, requester_email, user_id, date, time, status,
        response_message, note, created_at, updated_at
    FROM advisories
"#;

#[derive(new)]
pub struct AdvisoryRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AdvisoryRepository for AdvisoryRepositoryImpl {
    async fn create(&self, event: CreateAdvisory) -> AppResult<AdvisoryId> {
        let advisory_id = AdvisoryId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO advisories
                (advisory_id, programmer_id, programmer_email, programmer_name,
                requester_name, requester_email, user_id, date, time, status, note)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(advisory_id)
        .bind(event.programmer_id)
        .bind(event.programmer_email)
        .bind(event.programmer_name)
        .bind(event.requester_name)
        .bind(event.requester_email)
        .bind(event.user_id)
        .bind(event.slot.date)
        .bind(event.slot.time)
        .bind(AdvisoryStatus::Pending.as_ref())
        .bind(event.note)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No advisory record has been created".into(),
            ));
        }

        Ok(advisory_id)
    }

    async fn find_by_id(&self, advisory_id: AdvisoryId) -> AppResult<Option<Advisory>> {
        sqlx::query_as::<_, AdvisoryRow>(&format!("{SELECT_ADVISORIES} WHERE advisory_id = $1"))
            .bind(advisory_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(Advisory::try_from)
            .transpose()
    }

    async fn find_by(&self, filter: AdvisoryFilter) -> AppResult<Vec<Advisory>> {
        let sql = find_by_sql(&filter);
        let query = sqlx::query_as::<_, AdvisoryRow>(&sql);
        let query = match filter {
            AdvisoryFilter::All => query,
            AdvisoryFilter::ProviderId(provider_id) => query.bind(provider_id),
            AdvisoryFilter::ProviderEmail(email) => query.bind(email),
        };

        query
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .into_iter()
            .map(Advisory::try_from)
            .collect()
    }

    async fn update_status(&self, event: UpdateAdvisoryStatus) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // only a pending advisory can be decided
        let res = sqlx::query(
            r#"
                UPDATE advisories
                SET status = $1, response_message = $2, updated_at = NOW()
                WHERE advisory_id = $3 AND status = $4
            "#,
        )
        .bind(event.status.as_ref())
        .bind(event.response_message)
        .bind(event.advisory_id)
        .bind(AdvisoryStatus::Pending.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM advisories WHERE advisory_id = $1)")
                    .bind(event.advisory_id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            return Err(if exists {
                AppError::ConflictError(format!(
                    "Advisory {} has already been decided",
                    event.advisory_id
                ))
            } else {
                AppError::EntityNotFound(format!("Advisory {} does not exist", event.advisory_id))
            });
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

// Emails are compared as stored, without case folding.
fn find_by_sql(filter: &AdvisoryFilter) -> String {
    let condition = match filter {
        AdvisoryFilter::All => "",
        AdvisoryFilter::ProviderId(_) => "WHERE programmer_id = $1",
        AdvisoryFilter::ProviderEmail(_) => "WHERE programmer_email = $1",
    };
    format!("{SELECT_ADVISORIES} {condition} ORDER BY created_at DESC")
}
