use crate::model::id::{ProjectId, ProviderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
pub enum ProjectCategory {
    #[serde(rename = "academico")]
    #[strum(serialize = "academico")]
    Academic,
    #[serde(rename = "laboral")]
    #[strum(serialize = "laboral")]
    Professional,
}

/// Part of the stack the provider worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectRole {
    Frontend,
    Backend,
    Fullstack,
    Db,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub project_id: ProjectId,
    pub owner_id: ProviderId,
    pub title: String,
    pub description: Option<String>,
    pub category: ProjectCategory,
    pub role: ProjectRole,
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_their_stored_spelling() {
        assert_eq!(ProjectCategory::Professional.as_ref(), "laboral");
        assert_eq!(
            "academico".parse::<ProjectCategory>().unwrap(),
            ProjectCategory::Academic
        );
        assert_eq!(
            serde_json::to_string(&ProjectCategory::Academic).unwrap(),
            "\"academico\""
        );
    }

    #[test]
    fn roles_are_lowercase() {
        assert_eq!(ProjectRole::Db.as_ref(), "db");
        assert_eq!("fullstack".parse::<ProjectRole>().unwrap(), ProjectRole::Fullstack);
        assert!("devops".parse::<ProjectRole>().is_err());
    }
}
