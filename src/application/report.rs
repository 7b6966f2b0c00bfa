use crate::application::parse::parse_rows;
use crate::application::render::render;
use crate::application::summarize::summarize;
use crate::config::Config;
use crate::domain::entities::report::ReportMessage;
use crate::domain::error::DomainError;
use crate::domain::ports::mailer::Mailer;
use crate::domain::ports::sheet_source::SheetSource;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Drives one reporting run: fetch rows, parse, summarize, render, dispatch.
/// Forward-only, no retries; a failed stage ends the run.
pub struct ReportUseCase {
    config: Config,
    sheet: Arc<dyn SheetSource>,
    mailer: Arc<dyn Mailer>,
}

/// Terminal state of a successful run.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Report composed and handed to the mail provider.
    Sent(RunSummary),
    /// Dry run: report composed but deliberately not dispatched.
    Rendered(ReportMessage),
    /// Nothing to report and the exit-if-empty policy is on.
    Skipped { reason: String },
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub entry_count: usize,
    pub invalid_count: usize,
    pub subject: String,
    pub recipients: usize,
}

impl ReportUseCase {
    pub fn new(config: Config, sheet: Arc<dyn SheetSource>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config,
            sheet,
            mailer,
        }
    }

    pub async fn run(&self, dry_run: bool) -> Result<RunOutcome, DomainError> {
        // Resolve addressing up front when this run will dispatch, so a
        // missing sender/recipient aborts before any network call.
        let addressing = if dry_run {
            None
        } else {
            Some(self.config.sender_and_recipients()?)
        };

        info!(tab = %self.config.tab, sheet = %self.config.sheet_name, "fetching log rows");
        let rows = self.sheet.fetch_rows(&self.config.tab).await?;

        let mut parsed = parse_rows(&rows)?;
        if self.config.today_only {
            let today = Utc::now().with_timezone(&self.config.timezone).date_naive();
            parsed.entries.retain(|e| {
                e.timestamp.with_timezone(&self.config.timezone).date_naive() == today
            });
        }
        if !parsed.invalid.is_empty() {
            warn!(invalid = parsed.invalid.len(), "rows excluded from digest");
        }

        let digest = summarize(&parsed.entries, parsed.invalid.len());
        info!(entries = digest.entry_count, "digest built");

        if digest.is_empty() && self.config.exit_if_empty {
            info!("no valid entries, skipping send");
            return Ok(RunOutcome::Skipped {
                reason: "no valid entries and EXIT_IF_EMPTY is set".into(),
            });
        }

        let (from, to) = addressing.unwrap_or_default();
        let message = render(&digest, &parsed, &self.config, from, to);

        if dry_run {
            return Ok(RunOutcome::Rendered(message));
        }

        self.mailer.send(&message).await?;
        info!(subject = %message.subject, "report dispatched");
        Ok(RunOutcome::Sent(RunSummary {
            entry_count: digest.entry_count,
            invalid_count: digest.invalid_count,
            subject: message.subject,
            recipients: message.to.len(),
        }))
    }
}
