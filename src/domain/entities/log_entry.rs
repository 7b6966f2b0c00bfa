use crate::domain::values::action::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One valid row of the trading log. Built once per fetch from a sheet row,
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based sheet row number this entry came from (the header is row 1).
    pub row_number: usize,
    /// Instant the sheet recorded; naive source cells are taken as UTC.
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub action: Action,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub notes: Option<String>,
}

impl LogEntry {
    /// Quantity times price, when both are present.
    pub fn notional(&self) -> Option<f64> {
        match (self.quantity, self.price) {
            (Some(q), Some(p)) => Some(q * p),
            _ => None,
        }
    }
}
