use crate::model::{
    id::ProviderId,
    provider::{ProviderStats, Role, Socials},
};

#[derive(Debug)]
pub struct UpsertProfile {
    pub provider_id: ProviderId,
    pub display_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub quote: Option<String>,
    pub location: Option<String>,
    pub role: Role,
    pub photo_url: Option<String>,
    pub skills: Vec<String>,
    pub socials: Socials,
    pub stats: Option<ProviderStats>,
}
