use crate::database::{model::portfolio::PortfolioRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ProviderId,
    portfolio::{event::UpsertPortfolio, Portfolio},
};
use kernel::repository::portfolio::PortfolioRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PortfolioRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryImpl {
    async fn upsert(&self, event: UpsertPortfolio) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO portfolios (owner_id, headline, about, skills, tags, theme)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (owner_id) DO UPDATE SET
                    headline = EXCLUDED.headline,
                    about = EXCLUDED.about,
                    skills = EXCLUDED.skills,
                    tags = EXCLUDED.tags,
                    theme = EXCLUDED.theme,
                    updated_at = NOW()
            "#,
        )
        .bind(event.owner_id)
        .bind(event.headline)
        .bind(event.about)
        .bind(event.skills)
        .bind(event.tags)
        .bind(event.theme)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &ProviderId) -> AppResult<Option<Portfolio>> {
        let row = sqlx::query_as::<_, PortfolioRow>(
            r#"
                SELECT owner_id, headline, about, skills, tags, theme, updated_at
                FROM portfolios
                WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Portfolio::from))
    }
}
