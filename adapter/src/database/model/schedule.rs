use kernel::model::{
    id::ProviderId,
    schedule::{Schedule, ScheduleSlot},
};
use sqlx::types::Json;

// Slots are kept as one JSONB array per provider.
#[derive(sqlx::FromRow)]
pub struct ScheduleRow {
    pub provider_id: ProviderId,
    pub slots: Json<Vec<ScheduleSlot>>,
}

impl From<ScheduleRow> for Schedule {
    fn from(value: ScheduleRow) -> Self {
        let ScheduleRow { provider_id, slots } = value;
        Schedule {
            provider_id,
            slots: slots.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_json_uses_camel_case_slots() {
        let slots: Vec<ScheduleSlot> = serde_json::from_str(
            r#"[{"day":"Martes","from":"09:00","to":"12:00","available":true}]"#,
        )
        .unwrap();
        let schedule = Schedule::from(ScheduleRow {
            provider_id: ProviderId::new("uid-1"),
            slots: Json(slots),
        });
        assert_eq!(schedule.slots.len(), 1);
        assert_eq!(schedule.slots[0].day, "Martes");
        assert!(schedule.slots[0].available);
    }
}
