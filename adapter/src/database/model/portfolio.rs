use kernel::model::{id::ProviderId, portfolio::Portfolio};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct PortfolioRow {
    pub owner_id: ProviderId,
    pub headline: String,
    pub about: Option<String>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub theme: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioRow> for Portfolio {
    fn from(value: PortfolioRow) -> Self {
        let PortfolioRow {
            owner_id,
            headline,
            about,
            skills,
            tags,
            theme,
            updated_at,
        } = value;
        Portfolio {
            owner_id,
            headline,
            about,
            skills,
            tags,
            theme,
            updated_at,
        }
    }
}
