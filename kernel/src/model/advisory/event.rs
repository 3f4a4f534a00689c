use crate::model::{
    advisory::{AdvisoryStatus, RequestedSlot},
    id::{AdvisoryId, ProviderId},
};
use derive_new::new;

#[derive(Debug, Clone)]
pub struct CreateAdvisory {
    pub programmer_id: ProviderId,
    pub programmer_email: Option<String>,
    pub programmer_name: Option<String>,
    pub requester_name: String,
    pub requester_email: String,
    pub user_id: Option<String>,
    pub slot: RequestedSlot,
    pub note: Option<String>,
}

/// Applied only while the advisory is still pending.
#[derive(new, Debug, Clone)]
pub struct UpdateAdvisoryStatus {
    pub advisory_id: AdvisoryId,
    pub status: AdvisoryStatus,
    pub response_message: Option<String>,
}
