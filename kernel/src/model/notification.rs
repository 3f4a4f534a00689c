use crate::model::advisory::{Advisory, AdvisoryStatus};
use std::collections::BTreeMap;
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum NotificationKind {
    ToProvider,
    ToRequester,
}

/// An email to send through a transactional-email template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub to_email: String,
    pub params: BTreeMap<&'static str, String>,
}

impl Notification {
    /// Tells the provider about a new request. `None` when the provider
    /// has no known email.
    pub fn new_advisory(
        provider_email: Option<&str>,
        provider_name: Option<&str>,
        advisory: &NewAdvisoryNotice<'_>,
    ) -> Option<Self> {
        let to_email = provider_email.filter(|e| !e.trim().is_empty())?.to_string();
        let params = BTreeMap::from([
            ("to_email", to_email.clone()),
            ("programmer_name", or_default(provider_name, "Programador")),
            ("requester_name", advisory.requester_name.to_string()),
            ("requester_email", advisory.requester_email.to_string()),
            ("date", advisory.date.to_string()),
            ("time", advisory.time.to_string()),
            ("note", or_default(advisory.note, "Sin comentarios adicionales.")),
        ]);
        Some(Self {
            kind: NotificationKind::ToProvider,
            to_email,
            params,
        })
    }

    /// Tells the requester the outcome of their advisory. `None` when the
    /// advisory has no requester email.
    pub fn status_changed(
        advisory: &Advisory,
        status: AdvisoryStatus,
        provider_name: Option<&str>,
        response_message: Option<&str>,
    ) -> Option<Self> {
        let to_email = Some(advisory.requester_email.as_str())
            .filter(|e| !e.trim().is_empty())?
            .to_string();
        let default_message = match status {
            AdvisoryStatus::Approved => "Tu solicitud fue aprobada.",
            _ => "Tu solicitud fue rechazada.",
        };
        let params = BTreeMap::from([
            ("to_email", to_email.clone()),
            (
                "requester_name",
                or_default(Some(advisory.requester_name.as_str()), "Cliente"),
            ),
            ("programmer_name", or_default(provider_name, "Programador")),
            ("status", status.to_string()),
            (
                "date",
                or_default(Some(advisory.slot.date.as_str()), "Fecha por confirmar"),
            ),
            (
                "time",
                or_default(Some(advisory.slot.time.as_str()), "Hora por confirmar"),
            ),
            ("response_message", or_default(response_message, default_message)),
        ]);
        Some(Self {
            kind: NotificationKind::ToRequester,
            to_email,
            params,
        })
    }
}

/// Fields of a freshly created advisory that the provider email shows.
pub struct NewAdvisoryNotice<'a> {
    pub requester_name: &'a str,
    pub requester_email: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub note: Option<&'a str>,
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::advisory::tests::advisory;

    fn notice(note: Option<&str>) -> NewAdvisoryNotice<'_> {
        NewAdvisoryNotice {
            requester_name: "Ana",
            requester_email: "ana@example.com",
            date: "2024-06-04",
            time: "10:00",
            note,
        }
    }

    #[test]
    fn provider_notice_needs_an_email() {
        assert!(Notification::new_advisory(None, Some("Claudia"), &notice(None)).is_none());
        assert!(Notification::new_advisory(Some(" "), None, &notice(None)).is_none());
    }

    #[test]
    fn provider_notice_fills_defaults() {
        let n = Notification::new_advisory(Some("claudia@foreing.tech"), None, &notice(None))
            .unwrap();
        assert_eq!(n.kind, NotificationKind::ToProvider);
        assert_eq!(n.params["programmer_name"], "Programador");
        assert_eq!(n.params["note"], "Sin comentarios adicionales.");
        assert_eq!(n.params["date"], "2024-06-04");
    }

    #[test]
    fn requester_notice_defaults_message_by_status() {
        let a = advisory("claudia", None, 0);
        let approved =
            Notification::status_changed(&a, AdvisoryStatus::Approved, Some("Claudia"), None)
                .unwrap();
        assert_eq!(approved.to_email, "ana@example.com");
        assert_eq!(approved.params["status"], "aprobada");
        assert_eq!(approved.params["response_message"], "Tu solicitud fue aprobada.");
        assert_eq!(approved.params["programmer_name"], "Claudia");

        let rejected =
            Notification::status_changed(&a, AdvisoryStatus::Rejected, None, Some("Sin cupo"))
                .unwrap();
        assert_eq!(rejected.params["response_message"], "Sin cupo");
        assert_eq!(rejected.params["programmer_name"], "Programador");
    }

    #[test]
    fn kinds_use_kebab_case() {
        assert_eq!(NotificationKind::ToProvider.as_ref(), "to-provider");
        assert_eq!(NotificationKind::ToRequester.as_ref(), "to-requester");
    }
}
