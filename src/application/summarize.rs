use crate::domain::entities::digest::{CategoryBreakdown, Digest};
use crate::domain::entities::log_entry::LogEntry;
use std::collections::HashMap;

/// Aggregate the run's valid entries into a `Digest` in one pass. Zero
/// entries yield the empty digest, never an error.
pub fn summarize(entries: &[LogEntry], invalid_count: usize) -> Digest {
    if entries.is_empty() {
        return Digest::empty(invalid_count);
    }

    let mut earliest = entries[0].timestamp;
    let mut latest = entries[0].timestamp;
    // Category order is first-encounter, so repeated runs over the same rows
    // render byte-identical output. The map only indexes into the vec.
    let mut by_category: Vec<CategoryBreakdown> = Vec::new();
    let mut category_index: HashMap<String, usize> = HashMap::new();
    let mut sell_profit: Option<f64> = None;

    for entry in entries {
        earliest = earliest.min(entry.timestamp);
        latest = latest.max(entry.timestamp);

        let key = entry.action.to_string();
        let idx = *category_index.entry(key.clone()).or_insert_with(|| {
            by_category.push(CategoryBreakdown {
                category: key,
                count: 0,
                total_quantity: None,
                total_notional: None,
            });
            by_category.len() - 1
        });
        let bucket = &mut by_category[idx];
        bucket.count += 1;
        if let Some(q) = entry.quantity {
            bucket.total_quantity = Some(bucket.total_quantity.unwrap_or(0.0) + q);
        }
        if let Some(n) = entry.notional() {
            bucket.total_notional = Some(bucket.total_notional.unwrap_or(0.0) + n);
        }

        if let Some(profit) = sell_profit_for(entry) {
            sell_profit = Some(sell_profit.unwrap_or(0.0) + profit);
        }
    }

    Digest {
        entry_count: entries.len(),
        invalid_count,
        earliest: Some(earliest),
        latest: Some(latest),
        by_category,
        estimated_sell_profit: sell_profit,
    }
}

/// Estimated realised profit for a sell row: the log records the position's
/// market value and a "Gain X%" note, so with g = X/100 the profit is
/// notional * g / (1 + g).
fn sell_profit_for(entry: &LogEntry) -> Option<f64> {
    if !entry.action.is_sell() {
        return None;
    }
    let notional = entry.notional()?;
    let g = gain_pct_from_note(entry.notes.as_deref()?)? / 100.0;
    Some(notional * (g / (1.0 + g)))
}

/// Extract X from a "Gain X%" fragment anywhere in the note.
fn gain_pct_from_note(note: &str) -> Option<f64> {
    let lower = note.to_lowercase();
    if !lower.contains('%') {
        return None;
    }
    let frag = lower.split_once("gain")?.1;
    let mut num = String::new();
    for ch in frag.chars() {
        if ch.is_ascii_digit() || ch == '.' || ch == '-' {
            num.push(ch);
        } else if !num.is_empty() {
            break;
        }
    }
    num.parse().ok()
}
