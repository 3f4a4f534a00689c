use async_trait::async_trait;
use kernel::{
    model::notification::{Notification, NotificationKind},
    repository::notification::NotificationSender,
};
use reqwest::Client;
use serde::Serialize;
use shared::{
    config::EmailConfig,
    error::{AppError, AppResult},
};
use std::collections::BTreeMap;

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body of a template based transactional-email API (EmailJS).
#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<&'static str, String>,
}

pub struct EmailSender {
    client: Client,
    config: EmailConfig,
}

impl EmailSender {
    pub fn new(config: EmailConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.config.api_url.trim_end_matches('/'))
    }

    // None until the service, the key and the template for `kind` are set
    fn payload<'a>(&'a self, notification: &'a Notification) -> Option<EmailPayload<'a>> {
        let template_id = match notification.kind {
            NotificationKind::ToProvider => self.config.provider_template.as_deref(),
            NotificationKind::ToRequester => self.config.requester_template.as_deref(),
        }?;
        Some(EmailPayload {
            service_id: self.config.service_id.as_deref()?,
            template_id,
            user_id: self.config.public_key.as_deref()?,
            template_params: &notification.params,
        })
    }
}

#[async_trait]
impl NotificationSender for EmailSender {
    async fn send(&self, notification: Notification) -> AppResult<()> {
        let Some(payload) = self.payload(&notification) else {
            tracing::debug!(
                kind = notification.kind.as_ref(),
                to = %notification.to_email,
                "Email service is not configured, skipping notification"
            );
            return Ok(());
        };

        let res = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "email API answered {status}: {body}"
            )));
        }

        tracing::info!(
            kind = notification.kind.as_ref(),
            to = %notification.to_email,
            "Notification sent"
        );
        Ok(())
    }
}
