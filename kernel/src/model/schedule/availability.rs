//! Availability checks over a provider's recurring weekly slots.
//!
//! Everything here is a pure function of its arguments. Callers supply the
//! current wall-clock time where one is needed.

use super::{ScheduleSlot, Weekday};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday().into()
}

/// Whether a booking on `date` (`YYYY-MM-DD`) at `time` (`HH:MM`) fits the
/// provider's schedule.
///
/// A provider without slots, or without slots for that weekday, is open.
/// A weekday whose slots are all blocked is closed. An unparsable date is
/// never available.
pub fn is_available_at_slot(slots: &[ScheduleSlot], date: &str, time: &str) -> bool {
    if slots.is_empty() {
        return true;
    }

    let Ok(date) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
        return false;
    };
    let weekday = weekday_of(date);

    let mut day_slots = slots.iter().filter(|slot| slot.is_on(weekday)).peekable();
    if day_slots.peek().is_none() {
        return true;
    }

    let mut open = day_slots.filter(|slot| slot.available).peekable();
    if open.peek().is_none() {
        return false;
    }

    open.any(|slot| slot.covers(time))
}

/// Whether an open slot covers `now`. Unlike [`is_available_at_slot`] there
/// is no open-by-default case.
pub fn is_available_now(slots: &[ScheduleSlot], now: NaiveDateTime) -> bool {
    let weekday = weekday_of(now.date());
    let time = now.format(TIME_FORMAT).to_string();

    open_slots_on(slots, weekday).any(|slot| slot.covers(&time))
}

/// The next open slot starting strictly after `now`.
///
/// Later slots of the current day win; otherwise the following days are
/// scanned for a full week, which includes the current weekday one week
/// ahead.
pub fn next_available_slot(slots: &[ScheduleSlot], now: NaiveDateTime) -> Option<&ScheduleSlot> {
    let today = weekday_of(now.date());
    let time = now.format(TIME_FORMAT).to_string();

    let later_today = earliest(open_slots_on(slots, today).filter(|slot| slot.from > time));
    if later_today.is_some() {
        return later_today;
    }

    (1..=7)
        .map(|offset| today.nth_after(offset))
        .find_map(|day| earliest(open_slots_on(slots, day)))
}

fn open_slots_on(slots: &[ScheduleSlot], weekday: Weekday) -> impl Iterator<Item = &ScheduleSlot> {
    slots
        .iter()
        .filter(move |slot| slot.available && slot.is_on(weekday))
}

// `min_by` keeps the first of equal elements, so ties go to list order.
fn earliest<'a>(slots: impl Iterator<Item = &'a ScheduleSlot>) -> Option<&'a ScheduleSlot> {
    slots.min_by(|a, b| a.from.cmp(&b.from))
}
