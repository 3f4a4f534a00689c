use crate::model::validate::{is_clock_time, is_date};
use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    advisory::{event::CreateAdvisory, Advisory, AdvisoryStatus, RequestedSlot},
    id::{AdvisoryId, ProviderId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdvisoryRequest {
    #[garde(length(min = 1))]
    pub programmer_id: String,
    #[garde(email)]
    pub programmer_email: Option<String>,
    #[garde(skip)]
    pub programmer_name: Option<String>,
    #[garde(length(min = 1))]
    pub requester_name: String,
    #[garde(email)]
    pub requester_email: String,
    #[garde(skip)]
    pub user_id: Option<String>,
    #[garde(custom(is_date))]
    pub date: String,
    #[garde(custom(is_clock_time))]
    pub time: String,
    #[garde(length(max = 2000))]
    pub note: Option<String>,
}

impl From<CreateAdvisoryRequest> for CreateAdvisory {
    fn from(value: CreateAdvisoryRequest) -> Self {
        let CreateAdvisoryRequest {
            programmer_id,
            programmer_email,
            programmer_name,
            requester_name,
            requester_email,
            user_id,
            date,
            time,
            note,
        } = value;
        CreateAdvisory {
            programmer_id: ProviderId::new(programmer_id.trim()),
            programmer_email,
            programmer_name,
            requester_name,
            requester_email,
            user_id,
            slot: RequestedSlot { date, time },
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdvisoryStatusRequest {
    #[garde(skip)]
    pub status: AdvisoryStatus,
    #[garde(length(max = 2000))]
    pub response_message: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProviderAdvisoriesQuery {
    #[garde(email)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryCreatedResponse {
    pub advisory_id: AdvisoryId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResponse {
    pub advisory_id: AdvisoryId,
    pub programmer_id: ProviderId,
    pub programmer_email: Option<String>,
    pub programmer_name: Option<String>,
    pub requester_name: String,
    pub requester_email: String,
    pub user_id: Option<String>,
    pub date: String,
    pub time: String,
    pub status: AdvisoryStatus,
    pub response_message: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Advisory> for AdvisoryResponse {
    fn from(value: Advisory) -> Self {
        let Advisory {
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
        } = value;
        Self {
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
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvisoriesResponse {
    pub items: Vec<AdvisoryResponse>,
}

impl From<Vec<Advisory>> for AdvisoriesResponse {
    fn from(value: Vec<Advisory>) -> Self {
        Self {
            items: value.into_iter().map(AdvisoryResponse::from).collect(),
        }
    }
}
