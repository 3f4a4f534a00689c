use crate::model::id::{AdvisoryId, ProviderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use std::collections::HashSet;
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
pub enum AdvisoryStatus {
    #[serde(rename = "pendiente")]
    #[strum(serialize = "pendiente")]
    Pending,
    #[serde(rename = "aprobada")]
    #[strum(serialize = "aprobada")]
    Approved,
    #[serde(rename = "rechazada")]
    #[strum(serialize = "rechazada")]
    Rejected,
}

impl AdvisoryStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, AdvisoryStatus::Pending)
    }

    /// Validates a status change. Only pending advisories move, and only to
    /// one of the terminal states.
    pub fn transition_to(self, next: AdvisoryStatus) -> AppResult<AdvisoryStatus> {
        if self.is_terminal() {
            return Err(AppError::ConflictError(format!(
                "Advisory is already {self} and cannot become {next}"
            )));
        }
        if !next.is_terminal() {
            return Err(AppError::UnprocessableEntity(format!(
                "Advisory cannot be moved to {next}"
            )));
        }
        Ok(next)
    }
}

/// Calendar date and time a requester asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedSlot {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct Advisory {
    pub advisory_id: AdvisoryId,
    pub programmer_id: ProviderId,
    pub programmer_email: Option<String>,
    pub programmer_name: Option<String>,
    pub requester_name: String,
    pub requester_email: String,
    pub user_id: Option<String>,
    pub slot: RequestedSlot,
    pub status: AdvisoryStatus,
    pub response_message: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Store-side selection of advisories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryFilter {
    All,
    ProviderId(ProviderId),
    ProviderEmail(String),
}

/// Concatenates lookup batches, keeps the first copy of every advisory and
/// orders the result newest first. The sort is stable, so advisories created
/// at the same instant keep batch order.
pub fn merge_advisories(batches: impl IntoIterator<Item = Vec<Advisory>>) -> Vec<Advisory> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Advisory> = batches
        .into_iter()
        .flatten()
        .filter(|advisory| seen.insert(advisory.advisory_id))
        .collect();
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Duration;

    pub(crate) fn advisory(programmer_id: &str, email: Option<&str>, age_minutes: i64) -> Advisory {
        let created_at = Utc::now() - Duration::minutes(age_minutes);
        Advisory {
            advisory_id: AdvisoryId::new(),
            programmer_id: ProviderId::new(programmer_id),
            programmer_email: email.map(Into::into),
            programmer_name: None,
            requester_name: "Ana".into(),
            requester_email: "ana@example.com".into(),
            user_id: None,
            slot: RequestedSlot {
                date: "2024-06-04".into(),
                time: "10:00".into(),
            },
            status: AdvisoryStatus::Pending,
            response_message: None,
            note: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn pending_moves_to_either_terminal_state() {
        assert_eq!(
            AdvisoryStatus::Pending.transition_to(AdvisoryStatus::Approved).unwrap(),
            AdvisoryStatus::Approved
        );
        assert_eq!(
            AdvisoryStatus::Pending.transition_to(AdvisoryStatus::Rejected).unwrap(),
            AdvisoryStatus::Rejected
        );
    }

    #[test]
    fn terminal_states_are_immutable() {
        for from in [AdvisoryStatus::Approved, AdvisoryStatus::Rejected] {
            for to in [AdvisoryStatus::Pending, AdvisoryStatus::Approved, AdvisoryStatus::Rejected] {
                assert!(matches!(
                    from.transition_to(to),
                    Err(AppError::ConflictError(_))
                ));
            }
        }
    }

    #[test]
    fn pending_cannot_be_requested_again() {
        assert!(matches!(
            AdvisoryStatus::Pending.transition_to(AdvisoryStatus::Pending),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn status_uses_stored_spelling() {
        assert_eq!(AdvisoryStatus::Approved.as_ref(), "aprobada");
        assert_eq!("rechazada".parse::<AdvisoryStatus>().unwrap(), AdvisoryStatus::Rejected);
        assert_eq!(
            serde_json::to_string(&AdvisoryStatus::Pending).unwrap(),
            "\"pendiente\""
        );
    }

    #[test]
    fn merge_drops_duplicates_and_sorts_newest_first() {
        let old = advisory("claudia", None, 30);
        let new = advisory("uid-1", Some("claudia@foreing.tech"), 5);
        let merged = merge_advisories([
            vec![old.clone()],
            vec![new.clone(), old.clone()],
        ]);
        let ids: Vec<_> = merged.iter().map(|a| a.advisory_id).collect();
        assert_eq!(ids, vec![new.advisory_id, old.advisory_id]);
    }

    #[test]
    fn merge_keeps_arrival_order_on_equal_timestamps() {
        let first = advisory("a", None, 10);
        let mut second = advisory("b", None, 10);
        second.created_at = first.created_at;
        let merged = merge_advisories([vec![first.clone()], vec![second.clone()]]);
        assert_eq!(merged[0].advisory_id, first.advisory_id);
        assert_eq!(merged[1].advisory_id, second.advisory_id);
    }
}
