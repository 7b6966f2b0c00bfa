use crate::domain::error::DomainError;
use crate::domain::ports::sheet_source::{SheetRows, SheetSource};
use async_trait::async_trait;
use std::time::Duration;

/// Google Sheets v4 `values` reader. Token minting is left to the
/// environment; this adapter only presents a ready bearer token.
pub struct GoogleSheetsSource {
    base_url: String,
    spreadsheet_id: String,
    token: String,
    client: reqwest::Client,
}

#[derive(Debug, serde::Deserialize)]
struct ValuesResponse {
    /// Absent entirely when the tab has no cells.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsSource {
    pub fn new(base_url: String, spreadsheet_id: String, token: String) -> Self {
        Self {
            base_url,
            spreadsheet_id,
            token,
            client: reqwest::Client::builder()
                .user_agent("logdigest/0.1")
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsSource {
    async fn fetch_rows(&self, tab: &str) -> Result<SheetRows, DomainError> {
        if self.spreadsheet_id.is_empty() {
            return Err(DomainError::Config("SPREADSHEET_ID is not set".into()));
        }
        if self.token.is_empty() {
            return Err(DomainError::Config("SHEETS_API_TOKEN is not set".into()));
        }

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?majorDimension=ROWS",
            self.base_url, self.spreadsheet_id, tab
        );

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| DomainError::Access(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Access(format!(
                "Sheets API returned {status}: {body}"
            )));
        }

        let data: ValuesResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Access(format!("Sheets response parse error: {e}")))?;

        Ok(SheetRows { rows: data.values })
    }
}
