pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::report::{ReportUseCase, RunOutcome};
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::ports::mailer::Mailer;
use crate::domain::ports::sheet_source::SheetSource;
use crate::infrastructure::email::mailgun::MailgunMailer;
use crate::infrastructure::sheets::google::GoogleSheetsSource;
use std::sync::Arc;

/// The wired-up pipeline: config plus the two external collaborators.
pub struct LogDigest {
    report_uc: ReportUseCase,
}

impl LogDigest {
    /// Production wiring: Google Sheets reader and Mailgun sender built from
    /// the config's endpoints and credentials.
    pub fn new(config: Config) -> Self {
        let sheet: Arc<dyn SheetSource> = Arc::new(GoogleSheetsSource::new(
            config.sheets_base_url.clone(),
            config.spreadsheet_id.clone(),
            config.sheets_api_token.clone().unwrap_or_default(),
        ));
        let mailer: Arc<dyn Mailer> = Arc::new(MailgunMailer::new(
            config.mailgun_base_url.clone(),
            config.mailgun_domain.clone().unwrap_or_default(),
            config.mailgun_api_key.clone().unwrap_or_default(),
        ));
        Self::with_collaborators(config, sheet, mailer)
    }

    /// Seam for tests: inject any sheet source and mailer.
    pub fn with_collaborators(
        config: Config,
        sheet: Arc<dyn SheetSource>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            report_uc: ReportUseCase::new(config, sheet, mailer),
        }
    }

    /// One full pipeline invocation. With `dry_run` the report is composed
    /// but never handed to the mail provider.
    pub async fn run(&self, dry_run: bool) -> Result<RunOutcome, DomainError> {
        self.report_uc.run(dry_run).await
    }
}
