use crate::model::{id::ProviderId, schedule::ScheduleSlot};
use derive_new::new;

#[derive(new)]
pub struct UpsertSchedule {
    pub provider_id: ProviderId,
    pub slots: Vec<ScheduleSlot>,
}
