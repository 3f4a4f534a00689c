use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::ProviderId,
    portfolio::{event::UpsertPortfolio, Portfolio},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPortfolioRequest {
    #[garde(length(min = 1, max = 200))]
    pub headline: String,
    #[garde(length(max = 4000))]
    pub about: Option<String>,
    #[serde(default)]
    #[garde(inner(length(min = 1)))]
    pub skills: Vec<String>,
    #[serde(default)]
    #[garde(inner(length(min = 1)))]
    pub tags: Vec<String>,
    #[garde(skip)]
    pub theme: Option<String>,
}

pub struct UpsertPortfolioRequestWithOwner(pub ProviderId, pub UpsertPortfolioRequest);

impl From<UpsertPortfolioRequestWithOwner> for UpsertPortfolio {
    fn from(value: UpsertPortfolioRequestWithOwner) -> Self {
        let UpsertPortfolioRequestWithOwner(
            owner_id,
            UpsertPortfolioRequest {
                headline,
                about,
                skills,
                tags,
                theme,
            },
        ) = value;
        UpsertPortfolio {
            owner_id,
            headline,
            about,
            skills,
            tags,
            theme,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub owner_id: ProviderId,
    pub headline: String,
    pub about: Option<String>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub theme: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<Portfolio> for PortfolioResponse {
    fn from(value: Portfolio) -> Self {
        let Portfolio {
            owner_id,
            headline,
            about,
            skills,
            tags,
            theme,
            updated_at,
        } = value;
        Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_default_to_empty() {
        let req: UpsertPortfolioRequest =
            serde_json::from_value(serde_json::json!({ "headline": "Backend con Rust" })).unwrap();
        assert!(req.validate().is_ok());
        let event = UpsertPortfolio::from(UpsertPortfolioRequestWithOwner(
            ProviderId::new("claudia"),
            req,
        ));
        assert_eq!(event.owner_id.as_str(), "claudia");
        assert!(event.skills.is_empty());
        assert!(event.tags.is_empty());
    }

    #[test]
    fn blank_headline_is_rejected() {
        let req: UpsertPortfolioRequest = serde_json::from_value(serde_json::json!({
            "headline": "",
            "tags": ["web"]
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }
}
