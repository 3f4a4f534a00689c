use crate::model::id::ProviderId;

#[derive(Debug)]
pub struct UpsertPortfolio {
    pub owner_id: ProviderId,
    pub headline: String,
    pub about: Option<String>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub theme: Option<String>,
}
