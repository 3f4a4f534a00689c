use crate::model::id::ProviderId;
use serde::{Deserialize, Serialize};

pub mod availability;
pub mod event;

/// One recurring weekly window of a provider.
///
/// `day` keeps whatever spelling the provider saved; comparisons go through
/// [`Weekday::parse`]. `from` and `to` are zero padded `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub day: String,
    pub from: String,
    pub to: String,
    pub available: bool,
}

impl ScheduleSlot {
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::parse(&self.day)
    }

    pub fn is_on(&self, weekday: Weekday) -> bool {
        self.weekday() == Some(weekday)
    }

    pub fn covers(&self, time: &str) -> bool {
        self.from.as_str() <= time && time <= self.to.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub provider_id: ProviderId,
    pub slots: Vec<ScheduleSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical capitalised name, as shown to providers.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Case- and accent-insensitive lookup of a day name. Accepts the
    /// canonical names and their English equivalents.
    pub fn parse(name: &str) -> Option<Self> {
        let folded = fold(name);
        Weekday::ALL
            .into_iter()
            .find(|day| fold(day.canonical_name()) == folded || day.english_name() == folded)
    }

    /// The weekday `days` days after this one.
    pub fn nth_after(self, days: usize) -> Self {
        Weekday::ALL[(self as usize + days) % 7]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

fn fold(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_accents_and_whitespace() {
        assert_eq!(Weekday::parse("miercoles"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::parse("Miércoles"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::parse("  SÁBADO "), Some(Weekday::Saturday));
        assert_eq!(Weekday::parse("sabado"), Some(Weekday::Saturday));
        assert_eq!(Weekday::parse("Sunday"), Some(Weekday::Sunday));
        assert_eq!(Weekday::parse("someday"), None);
    }

    #[test]
    fn canonical_names_parse_back() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::parse(day.canonical_name()), Some(day));
        }
    }

    #[test]
    fn weekdays_wrap_around() {
        assert_eq!(Weekday::Sunday.nth_after(1), Weekday::Monday);
        assert_eq!(Weekday::Tuesday.nth_after(7), Weekday::Tuesday);
        assert_eq!(Weekday::Friday.nth_after(3), Weekday::Monday);
    }

    #[test]
    fn slot_bounds_are_inclusive() {
        let slot = ScheduleSlot {
            day: "Lunes".into(),
            from: "09:00".into(),
            to: "12:00".into(),
            available: true,
        };
        assert!(slot.covers("09:00"));
        assert!(slot.covers("12:00"));
        assert!(!slot.covers("08:59"));
        assert!(!slot.covers("12:01"));
    }
}
