use crate::domain::error::DomainError;
use chrono_tz::Tz;

/// Run configuration, read from the environment once at startup and threaded
/// into the pipeline as an immutable value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name of the spreadsheet, used in the report title.
    pub sheet_name: String,
    /// Sheets API document id the adapter addresses.
    pub spreadsheet_id: String,
    /// Tab within the document holding the log.
    pub tab: String,
    /// Zone every displayed timestamp is converted into.
    pub timezone: Tz,
    /// When true and the run has zero valid entries, skip the send entirely.
    pub exit_if_empty: bool,
    /// When true, digest only entries whose local date is today.
    pub today_only: bool,
    pub email_from: Option<String>,
    pub email_to: Vec<String>,
    pub mailgun_api_key: Option<String>,
    pub mailgun_domain: Option<String>,
    pub mailgun_base_url: String,
    pub sheets_api_token: Option<String>,
    pub sheets_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        let tz_name = env_or("LOCAL_TZ", "America/Denver");
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| DomainError::Config(format!("Unknown time zone: {tz_name}")))?;

        Ok(Self {
            sheet_name: env_or("SHEET_NAME", "Trading Log"),
            spreadsheet_id: std::env::var("SPREADSHEET_ID").unwrap_or_default(),
            tab: env_or("LOG_TAB", "log"),
            timezone,
            exit_if_empty: env_flag("EXIT_IF_EMPTY"),
            today_only: env_flag("TODAY_ONLY"),
            email_from: std::env::var("EMAIL_FROM").ok(),
            email_to: std::env::var("EMAIL_TO")
                .map(|v| split_addresses(&v))
                .unwrap_or_default(),
            mailgun_api_key: std::env::var("MAILGUN_API_KEY").ok(),
            mailgun_domain: std::env::var("MAILGUN_DOMAIN").ok(),
            mailgun_base_url: env_or("MAILGUN_BASE_URL", "https://api.mailgun.net"),
            sheets_api_token: std::env::var("SHEETS_API_TOKEN").ok(),
            sheets_base_url: env_or("SHEETS_BASE_URL", "https://sheets.googleapis.com"),
        })
    }

    /// Sender and at least one recipient, or a Config error naming what is
    /// missing. Checked before any dispatch is attempted.
    pub fn sender_and_recipients(&self) -> Result<(String, Vec<String>), DomainError> {
        let from = self
            .email_from
            .clone()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::Config("EMAIL_FROM is not set".into()))?;
        if self.email_to.is_empty() {
            return Err(DomainError::Config("EMAIL_TO has no recipients".into()));
        }
        Ok((from, self.email_to.clone()))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> bool {
    matches!(
        std::env::var(key).unwrap_or_default().to_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn split_addresses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
