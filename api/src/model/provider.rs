use garde::Validate;
use kernel::model::{
    id::ProviderId,
    provider::{event::UpsertProfile, ProfileFilter, ProviderProfile, ProviderStats, Role, Socials},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct ProviderListQuery {
    #[garde(skip)]
    pub role: Option<Role>,
}

impl From<ProviderListQuery> for ProfileFilter {
    fn from(value: ProviderListQuery) -> Self {
        ProfileFilter { role: value.role }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[garde(length(min = 1))]
    pub display_name: String,
    #[garde(skip)]
    pub last_name: Option<String>,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub specialty: Option<String>,
    #[garde(length(max = 2000))]
    pub bio: Option<String>,
    #[garde(length(max = 280))]
    pub quote: Option<String>,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(skip)]
    pub role: Option<Role>,
    #[garde(skip)]
    pub photo_url: Option<String>,
    #[serde(default)]
    #[garde(inner(length(min = 1)))]
    pub skills: Vec<String>,
    #[serde(default)]
    #[garde(skip)]
    pub socials: Socials,
    #[garde(skip)]
    pub stats: Option<ProviderStats>,
}

pub struct UpsertProfileRequestWithId(pub ProviderId, pub UpsertProfileRequest);

impl From<UpsertProfileRequestWithId> for UpsertProfile {
    fn from(value: UpsertProfileRequestWithId) -> Self {
        let UpsertProfileRequestWithId(
            provider_id,
            UpsertProfileRequest {
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
            },
        ) = value;
        UpsertProfile {
            provider_id,
            display_name,
            last_name,
            email,
            specialty,
            bio,
            quote,
            location,
            role: role.unwrap_or(Role::Programmer),
            photo_url,
            skills,
            socials,
            stats,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
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

impl From<ProviderProfile> for ProviderResponse {
    fn from(value: ProviderProfile) -> Self {
        let ProviderProfile {
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
        Self {
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
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub items: Vec<ProviderResponse>,
}

impl From<Vec<ProviderProfile>> for ProvidersResponse {
    fn from(value: Vec<ProviderProfile>) -> Self {
        Self {
            items: value.into_iter().map(ProviderResponse::from).collect(),
        }
    }
}
