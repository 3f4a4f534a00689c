use kernel::model::{
    advisory::{Advisory, AdvisoryStatus, RequestedSlot},
    id::{AdvisoryId, ProviderId},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct AdvisoryRow {
    pub advisory_id: AdvisoryId,
    pub programmer_id: ProviderId,
    pub programmer_email: Option<String>,
    pub programmer_name: Option<String>,
    pub requester_name: String,
    pub requester_email: String,
    pub user_id: Option<String>,
    pub date: String,
    pub time: String,
    pub status: String,
    pub response_message: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AdvisoryRow> for Advisory {
    type Error = AppError;

    fn try_from(value: AdvisoryRow) -> Result<Self, Self::Error> {
        let AdvisoryRow {
            advisory_id,
            programmer_id,
            programmer_email,
            programmer_name,
            requester_name,
            requester_email,
            user_id,
            date,
            time,
            status,
            response_message,
            note,
            created_at,
            updated_at,
        } = value;
        let status = status.parse::<AdvisoryStatus>().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "advisory {advisory_id} has unknown status `{status}`"
            ))
        })?;
        Ok(Advisory {
            advisory_id,
            programmer_id,
            programmer_email,
            programmer_name,
            requester_name,
            requester_email,
            user_id,
            slot: RequestedSlot { date, time },
            status,
            response_message,
            note,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> AdvisoryRow {
        AdvisoryRow {
            advisory_id: AdvisoryId::new(),
            programmer_id: ProviderId::new("claudia"),
            programmer_email: Some("claudia@foreing.tech".into()),
            programmer_name: None,
            requester_name: "Ana".into(),
            requester_email: "ana@example.com".into(),
            user_id: None,
            date: "2024-06-04".into(),
            time: "10:00".into(),
            status: status.into(),
            response_message: None,
            note: Some("API review".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn stored_status_is_parsed() {
        let advisory = Advisory::try_from(row("aprobada")).unwrap();
        assert_eq!(advisory.status, AdvisoryStatus::Approved);
        assert_eq!(advisory.slot.date, "2024-06-04");
        assert_eq!(advisory.slot.time, "10:00");
        assert_eq!(advisory.programmer_id.as_str(), "claudia");
    }

    #[test]
    fn unknown_status_is_a_conversion_error() {
        assert!(matches!(
            Advisory::try_from(row("archivada")),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
