use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate over one reporting run's valid entries. Derived purely from the
/// entry sequence; an empty run yields the all-zero value, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub entry_count: usize,
    pub invalid_count: usize,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    /// Per-category rollup in first-encounter order, so repeated runs over
    /// the same rows render identically.
    pub by_category: Vec<CategoryBreakdown>,
    /// Estimated realised profit across sell rows carrying a "Gain X%" note.
    pub estimated_sell_profit: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: usize,
    pub total_quantity: Option<f64>,
    pub total_notional: Option<f64>,
}

impl Digest {
    pub fn empty(invalid_count: usize) -> Self {
        Self {
            entry_count: 0,
            invalid_count,
            earliest: None,
            latest: None,
            by_category: Vec::new(),
            estimated_sell_profit: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}
