use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Raw sheet contents: header row (when present) plus data rows, every cell
/// as the string the sheet holds.
#[derive(Debug, Clone, Default)]
pub struct SheetRows {
    pub rows: Vec<Vec<String>>,
}

impl SheetRows {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

/// Read capability over the remote spreadsheet. Auth and transport live
/// behind this seam; the core only sees rows of string cells.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch every row of the named tab, header row first.
    /// Fails with `DomainError::Access` when the tab cannot be read.
    async fn fetch_rows(&self, tab: &str) -> Result<SheetRows, DomainError>;
}
