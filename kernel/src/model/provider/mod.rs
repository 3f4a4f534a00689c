use crate::model::id::ProviderId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Programmer,
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
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

/// Public contact handles shown on a provider's card. Stored as one JSON
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// Self-reported figures for the profile header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    pub projects: i32,
    pub experience: String,
    pub clients: i32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileFilter {
    pub role: Option<Role>,
}

/// Where to reach a provider. Either part may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderContact {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl ProviderContact {
    pub fn new(email: Option<String>, name: Option<String>) -> Self {
        Self {
            email: non_blank(email),
            name: non_blank(name),
        }
    }

    /// Profile values win; blank ones fall back to `self`.
    pub fn overridden_by(self, profile: &ProviderProfile) -> Self {
        Self {
            email: non_blank(Some(profile.email.clone())).or(self.email),
            name: non_blank(Some(profile.display_name.clone())).or(self.name),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Maps seed email addresses to the legacy provider ids that historical
/// advisories were filed under.
#[derive(Debug, Clone, Default)]
pub struct ProviderAliases(BTreeMap<String, ProviderId>);

impl ProviderAliases {
    pub fn new(aliases: BTreeMap<String, String>) -> Self {
        Self(
            aliases
                .into_iter()
                .map(|(email, id)| (email.to_lowercase(), ProviderId::new(id)))
                .collect(),
        )
    }

    pub fn lookup(&self, email: &str) -> Option<&ProviderId> {
        self.0.get(&email.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(email: &str, display_name: &str) -> ProviderProfile {
        ProviderProfile {
            provider_id: ProviderId::new("uid-1"),
            display_name: display_name.into(),
            last_name: None,
            email: email.into(),
            specialty: None,
            bio: None,
            quote: None,
            location: None,
            role: Role::Programmer,
            photo_url: None,
            skills: vec![],
            socials: Socials::default(),
            stats: None,
        }
    }

    #[test]
    fn profile_values_override_fallback() {
        let fallback = ProviderContact::new(Some("old@x.dev".into()), Some("Old".into()));
        let contact = fallback.overridden_by(&profile("new@x.dev", "New"));
        assert_eq!(contact.email.as_deref(), Some("new@x.dev"));
        assert_eq!(contact.name.as_deref(), Some("New"));
    }

    #[test]
    fn blank_profile_values_keep_fallback() {
        let fallback = ProviderContact::new(Some("old@x.dev".into()), None);
        let contact = fallback.overridden_by(&profile("", " "));
        assert_eq!(contact.email.as_deref(), Some("old@x.dev"));
        assert_eq!(contact.name, None);
    }

    #[test]
    fn alias_lookup_ignores_case() {
        let aliases = ProviderAliases::new(BTreeMap::from([(
            "claudia@foreing.tech".to_string(),
            "claudia".to_string(),
        )]));
        assert_eq!(
            aliases.lookup("Claudia@Foreing.tech"),
            Some(&ProviderId::new("claudia"))
        );
        assert_eq!(aliases.lookup("someone@foreing.tech"), None);
    }

    #[test]
    fn roles_use_lowercase_names() {
        assert_eq!("programmer".parse::<Role>().unwrap(), Role::Programmer);
        assert_eq!(Role::Admin.as_ref(), "admin");
    }

    #[test]
    fn empty_social_handles_are_omitted() {
        let socials = Socials {
            github: Some("https://github.com/valeria".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&socials).unwrap(),
            serde_json::json!({ "github": "https://github.com/valeria" })
        );
        let parsed: Socials = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Socials::default());
    }
}
