use crate::domain::entities::report::ReportMessage;
use crate::domain::error::DomainError;
use crate::domain::ports::mailer::Mailer;
use async_trait::async_trait;
use std::time::Duration;

/// Mailgun messages-API adapter. One form POST per run, no retries.
pub struct MailgunMailer {
    base_url: String,
    domain: String,
    api_key: String,
    client: reqwest::Client,
}

impl MailgunMailer {
    pub fn new(base_url: String, domain: String, api_key: String) -> Self {
        Self {
            base_url,
            domain,
            api_key,
            client: reqwest::Client::builder()
                .user_agent("logdigest/0.1")
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(&self, message: &ReportMessage) -> Result<(), DomainError> {
        if self.domain.is_empty() || self.api_key.is_empty() {
            return Err(DomainError::Config(
                "MAILGUN_DOMAIN or MAILGUN_API_KEY is not set".into(),
            ));
        }
        if !message.has_recipients() {
            return Err(DomainError::Config("recipient list is empty".into()));
        }

        let url = format!("{}/v3/{}/messages", self.base_url, self.domain);
        let form = [
            ("from", message.from.clone()),
            ("to", message.to.join(", ")),
            ("subject", message.subject.clone()),
            ("text", message.text_body.clone()),
            ("html", message.html_body.clone()),
        ];

        let resp = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| DomainError::Delivery(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Delivery(format!(
                "Mailgun send failed: {status} {body}"
            )));
        }
        Ok(())
    }
}
