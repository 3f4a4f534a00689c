use kernel::model::{
    id::ProviderId,
    provider::{ProviderProfile, ProviderStats, Role, Socials},
};
use shared::error::AppError;
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
pub struct ProfileRow {
    pub provider_id: ProviderId,
    pub display_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub specialty: Option<String>,
    pub bio: Option<String>,
    pub quote: Option<String>,
    pub location: Option<String>,
    pub role: String,
    pub photo_url: Option<String>,
    pub skills: Vec<String>,
    pub socials: Json<Socials>,
    pub stats: Option<Json<ProviderStats>>,
}

impl TryFrom<ProfileRow> for ProviderProfile {
    type Error = AppError;

    fn try_from(value: ProfileRow) -> Result<Self, Self::Error> {
        let ProfileRow {
            provider_id,
            display_name,
            last_name,
            email,
            specialty,
            bio,
            quote,
            location,
            role,
            photo_url,
            skills,
            socials,
            stats,
        } = value;
        let role = role.parse::<Role>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "provider {provider_id} has unknown role `{role}`"
            ))
        })?;
        Ok(ProviderProfile {
            provider_id,
            display_name,
            last_name,
            email,
            specialty,
            bio,
            quote,
            location,
            role,
            photo_url,
            skills,
            socials: socials.0,
            stats: stats.map(|stats| stats.0),
        })
    }
}
