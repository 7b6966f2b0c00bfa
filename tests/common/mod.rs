//! Shared test helpers: in-memory collaborators behind the port traits.
#![allow(dead_code)]

use async_trait::async_trait;
use logdigest::config::Config;
use logdigest::domain::entities::report::ReportMessage;
use logdigest::domain::error::DomainError;
use logdigest::domain::ports::mailer::Mailer;
use logdigest::domain::ports::sheet_source::{SheetRows, SheetSource};
use logdigest::LogDigest;
use std::sync::{Arc, Mutex};

pub fn test_config() -> Config {
    Config {
        sheet_name: "Trading Log".into(),
        spreadsheet_id: "sheet-1".into(),
        tab: "log".into(),
        timezone: chrono_tz::America::Denver,
        exit_if_empty: false,
        today_only: false,
        email_from: Some("alerts@example.com".into()),
        email_to: vec!["me@example.com".into()],
        mailgun_api_key: Some("key".into()),
        mailgun_domain: Some("mg.example.com".into()),
        mailgun_base_url: "https://api.mailgun.net".into(),
        sheets_api_token: Some("token".into()),
        sheets_base_url: "https://sheets.googleapis.com".into(),
    }
}

pub fn rows(cells: &[&[&str]]) -> SheetRows {
    SheetRows {
        rows: cells
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

/// Sheet source that serves a fixed set of rows.
pub struct StaticSheet {
    rows: SheetRows,
}

impl StaticSheet {
    pub fn new(cells: &[&[&str]]) -> Self {
        Self { rows: rows(cells) }
    }
}

#[async_trait]
impl SheetSource for StaticSheet {
    async fn fetch_rows(&self, _tab: &str) -> Result<SheetRows, DomainError> {
        Ok(self.rows.clone())
    }
}

/// Sheet source whose fetch always fails, as a rejected credential would.
pub struct FailingSheet;

#[async_trait]
impl SheetSource for FailingSheet {
    async fn fetch_rows(&self, _tab: &str) -> Result<SheetRows, DomainError> {
        Err(DomainError::Access("credentials rejected".into()))
    }
}

/// Mailer that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ReportMessage>>,
}

impl RecordingMailer {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<ReportMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &ReportMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Mailer that fails the way a provider 500 would.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &ReportMessage) -> Result<(), DomainError> {
        Err(DomainError::Delivery("Mailgun send failed: 500 boom".into()))
    }
}

pub fn setup(config: Config, cells: &[&[&str]]) -> (LogDigest, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let app = LogDigest::with_collaborators(config, Arc::new(StaticSheet::new(cells)), mailer.clone());
    (app, mailer)
}
