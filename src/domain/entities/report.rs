use serde::Serialize;

/// The outbound artifact: handed to the mail collaborator exactly once per
/// run, never retained afterward.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl ReportMessage {
    /// Recipient list must be non-empty before dispatch is attempted.
    pub fn has_recipients(&self) -> bool {
        !self.to.is_empty()
    }
}
