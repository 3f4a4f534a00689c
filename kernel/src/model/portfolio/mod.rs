use crate::model::id::ProviderId;
use chrono::{DateTime, Utc};

pub mod event;

/// A provider's portfolio page. At most one per provider.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub owner_id: ProviderId,
    pub headline: String,
    pub about: Option<String>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub theme: Option<String>,
    pub updated_at: DateTime<Utc>,
}
