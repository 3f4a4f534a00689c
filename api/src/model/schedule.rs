use crate::model::validate::{is_clock_time, is_weekday};
use garde::Validate;
use kernel::model::{
    id::ProviderId,
    schedule::{
        availability::is_available_at_slot, event::UpsertSchedule, Schedule, ScheduleSlot,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlotPayload {
    #[garde(custom(is_weekday))]
    pub day: String,
    #[garde(custom(is_clock_time))]
    pub from: String,
    #[garde(custom(is_clock_time))]
    pub to: String,
    #[garde(skip)]
    pub available: bool,
}

impl From<ScheduleSlotPayload> for ScheduleSlot {
    fn from(value: ScheduleSlotPayload) -> Self {
        let ScheduleSlotPayload {
            day,
            from,
            to,
            available,
        } = value;
        ScheduleSlot {
            day,
            from,
            to,
            available,
        }
    }
}

impl From<ScheduleSlot> for ScheduleSlotPayload {
    fn from(value: ScheduleSlot) -> Self {
        let ScheduleSlot {
            day,
            from,
            to,
            available,
        } = value;
        Self {
            day,
            from,
            to,
            available,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    #[garde(dive, custom(windows_are_ordered))]
    pub slots: Vec<ScheduleSlotPayload>,
}

fn windows_are_ordered(slots: &[ScheduleSlotPayload], _: &()) -> garde::Result {
    match slots.iter().find(|slot| slot.from > slot.to) {
        Some(slot) => Err(garde::Error::new(format!(
            "slot on {} ends ({}) before it starts ({})",
            slot.day, slot.to, slot.from
        ))),
        None => Ok(()),
    }
}

pub struct UpdateScheduleRequestWithId(pub ProviderId, pub UpdateScheduleRequest);

impl From<UpdateScheduleRequestWithId> for UpsertSchedule {
    fn from(value: UpdateScheduleRequestWithId) -> Self {
        let UpdateScheduleRequestWithId(provider_id, UpdateScheduleRequest { slots }) = value;
        UpsertSchedule::new(provider_id, slots.into_iter().map(ScheduleSlot::from).collect())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub provider_id: ProviderId,
    pub slots: Vec<ScheduleSlotPayload>,
}

impl ScheduleResponse {
    pub fn empty(provider_id: ProviderId) -> Self {
        Self {
            provider_id,
            slots: Vec::new(),
        }
    }
}

impl From<Schedule> for ScheduleResponse {
    fn from(value: Schedule) -> Self {
        let Schedule { provider_id, slots } = value;
        Self {
            provider_id,
            slots: slots.into_iter().map(ScheduleSlotPayload::from).collect(),
        }
    }
}

// Malformed values are left to the matcher, which answers instead of failing.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub date: String,
    pub time: String,
    pub available: bool,
}

impl AvailabilityResponse {
    pub fn evaluate(slots: &[ScheduleSlot], query: AvailabilityQuery) -> Self {
        let AvailabilityQuery { date, time } = query;
        let available = is_available_at_slot(slots, &date, &time);
        Self {
            date,
            time,
            available,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityNowResponse {
    pub available_now: bool,
    pub next_slot: Option<ScheduleSlotPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> UpdateScheduleRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn well_formed_schedule_passes() {
        let req = request(serde_json::json!({
            "slots": [
                { "day": "Lunes", "from": "09:00", "to": "12:00", "available": true },
                { "day": "miercoles", "from": "14:00", "to": "18:00", "available": false }
            ]
        }));
        assert!(req.validate().is_ok());

        let event = UpsertSchedule::from(UpdateScheduleRequestWithId(ProviderId::new("uid-1"), req));
        assert_eq!(event.slots.len(), 2);
        assert_eq!(event.slots[1].day, "miercoles");
    }

    #[test]
    fn unknown_day_and_unpadded_time_fail() {
        let req = request(serde_json::json!({
            "slots": [{ "day": "Funday", "from": "9:00", "to": "12:00", "available": true }]
        }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn inverted_window_fails() {
        let req = request(serde_json::json!({
            "slots": [{ "day": "Lunes", "from": "12:00", "to": "09:00", "available": true }]
        }));
        assert!(req.validate().is_err());
    }

    fn query(date: &str, time: &str) -> AvailabilityQuery {
        AvailabilityQuery {
            date: date.into(),
            time: time.into(),
        }
    }

    #[test]
    fn malformed_date_is_answered_not_rejected() {
        let answer = AvailabilityResponse::evaluate(&[], query("2024-02-30", "10:00"));
        assert!(answer.available);
        assert_eq!(answer.date, "2024-02-30");

        let slots = vec![ScheduleSlot {
            day: "Martes".into(),
            from: "09:00".into(),
            to: "12:00".into(),
            available: true,
        }];
        assert!(!AvailabilityResponse::evaluate(&slots, query("2024-02-30", "10:00")).available);
        assert!(!AvailabilityResponse::evaluate(&slots, query("not-a-date", "10:00")).available);
        // 2024-06-04 is a Tuesday.
        assert!(AvailabilityResponse::evaluate(&slots, query("2024-06-04", "10:00")).available);
    }

    #[test]
    fn availability_query_accepts_any_strings() {
        let parsed: AvailabilityQuery =
            serde_json::from_value(serde_json::json!({ "date": "2024-13-01", "time": "10h" }))
                .unwrap();
        assert_eq!(parsed.date, "2024-13-01");
    }
}
