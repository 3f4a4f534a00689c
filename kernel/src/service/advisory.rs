use crate::{
    model::{
        advisory::{
            event::{CreateAdvisory, UpdateAdvisoryStatus},
            merge_advisories, Advisory, AdvisoryFilter, AdvisoryStatus,
        },
        id::{AdvisoryId, ProviderId},
        notification::{NewAdvisoryNotice, Notification},
        provider::{ProviderAliases, ProviderContact},
        schedule::availability::is_available_at_slot,
    },
    repository::{
        advisory::AdvisoryRepository, notification::NotificationSender,
        profile::ProfileRepository, schedule::ScheduleRepository,
    },
};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Lifecycle of advisory requests: booking, lookup and status changes.
///
/// Profile lookups and outgoing emails are best effort. Only the advisory
/// store decides whether an operation succeeds.
#[derive(new, Clone)]
pub struct AdvisoryService {
    advisories: Arc<dyn AdvisoryRepository>,
    profiles: Arc<dyn ProfileRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    notifier: Arc<dyn NotificationSender>,
    aliases: Arc<ProviderAliases>,
}

impl AdvisoryService {
    /// Current contact of a provider, falling back to `fallback` for
    /// anything the profile store cannot tell. Never fails.
    pub async fn resolve_provider_contact(
        &self,
        provider_id: &ProviderId,
        fallback: ProviderContact,
    ) -> ProviderContact {
        if provider_id.is_empty() {
            return fallback;
        }

        match self.profiles.find_by_id(provider_id).await {
            Ok(Some(profile)) => fallback.overridden_by(&profile),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(
                    provider_id = %provider_id,
                    error.message = %e,
                    "Provider lookup failed, using fallback contact"
                );
                fallback
            }
        }
    }

    /// Books an advisory after checking the provider's weekly schedule,
    /// then tells the provider about it.
    pub async fn create(&self, mut event: CreateAdvisory) -> AppResult<AdvisoryId> {
        let slots = self
            .schedules
            .find_by_provider_id(&event.programmer_id)
            .await?
            .map(|schedule| schedule.slots)
            .unwrap_or_default();

        if !is_available_at_slot(&slots, &event.slot.date, &event.slot.time) {
            return Err(AppError::UnprocessableEntity(format!(
                "Provider {} is not available on {} at {}",
                event.programmer_id, event.slot.date, event.slot.time
            )));
        }

        let contact = self
            .resolve_provider_contact(
                &event.programmer_id,
                ProviderContact::new(event.programmer_email.take(), event.programmer_name.take()),
            )
            .await;
        event.programmer_email = contact.email;
        event.programmer_name = contact.name;

        let advisory_id = self.advisories.create(event.clone()).await?;
        tracing::info!(
            advisory_id = %advisory_id,
            provider_id = %event.programmer_id,
            "Advisory created"
        );

        let notice = NewAdvisoryNotice {
            requester_name: &event.requester_name,
            requester_email: &event.requester_email,
            date: &event.slot.date,
            time: &event.slot.time,
            note: event.note.as_deref(),
        };
        if let Some(notification) = Notification::new_advisory(
            event.programmer_email.as_deref(),
            event.programmer_name.as_deref(),
            &notice,
        ) {
            self.notify(notification).await;
        }

        Ok(advisory_id)
    }

    /// Advisories addressed to a provider, found by id, by email and by the
    /// legacy id the email is aliased to. Newest first, without duplicates.
    pub async fn list_for_provider(
        &self,
        provider_id: &ProviderId,
        provider_email: Option<&str>,
    ) -> AppResult<Vec<Advisory>> {
        let mut batches = vec![
            self.advisories
                .find_by(AdvisoryFilter::ProviderId(provider_id.clone()))
                .await?,
        ];

        if let Some(email) = provider_email.filter(|e| !e.trim().is_empty()) {
            batches.push(
                self.advisories
                    .find_by(AdvisoryFilter::ProviderEmail(email.to_string()))
                    .await?,
            );

            if let Some(alias) = self.aliases.lookup(email) {
                batches.push(
                    self.advisories
                        .find_by(AdvisoryFilter::ProviderId(alias.clone()))
                        .await?,
                );
            }
        }

        Ok(merge_advisories(batches))
    }

    pub async fn list_all(&self) -> AppResult<Vec<Advisory>> {
        let all = self.advisories.find_by(AdvisoryFilter::All).await?;
        Ok(merge_advisories([all]))
    }

    /// Moves a pending advisory to a terminal status and emails the
    /// requester. A failed email does not undo the status change.
    pub async fn transition(
        &self,
        advisory_id: AdvisoryId,
        status: AdvisoryStatus,
        response_message: Option<String>,
    ) -> AppResult<()> {
        let advisory = self
            .advisories
            .find_by_id(advisory_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Advisory {advisory_id} does not exist"))
            })?;

        let status = advisory.status.transition_to(status)?;

        self.advisories
            .update_status(UpdateAdvisoryStatus::new(
                advisory_id,
                status,
                response_message.clone(),
            ))
            .await?;
        tracing::info!(advisory_id = %advisory_id, status = %status, "Advisory status changed");

        let contact = self
            .resolve_provider_contact(
                &advisory.programmer_id,
                ProviderContact::new(
                    advisory.programmer_email.clone(),
                    advisory.programmer_name.clone(),
                ),
            )
            .await;

        if let Some(notification) = Notification::status_changed(
            &advisory,
            status,
            contact.name.as_deref(),
            response_message.as_deref(),
        ) {
            self.notify(notification).await;
        }

        Ok(())
    }

    async fn notify(&self, notification: Notification) {
        let kind = notification.kind;
        if let Err(e) = self.notifier.send(notification).await {
            tracing::warn!(
                kind = kind.as_ref(),
                error.cause_chain = ?e,
                error.message = %e,
                "Notification could not be sent"
            );
        }
    }
}
