use crate::application::parse::ParseOutput;
use crate::config::Config;
use crate::domain::entities::digest::{CategoryBreakdown, Digest};
use crate::domain::entities::log_entry::LogEntry;
use crate::domain::entities::report::ReportMessage;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Render the digest and parsed rows into the outbound message. Pure
/// formatting: identical inputs produce byte-identical output, and an empty
/// digest renders an explicit "no entries" report rather than failing.
pub fn render(
    digest: &Digest,
    parsed: &ParseOutput,
    config: &Config,
    from: String,
    to: Vec<String>,
) -> ReportMessage {
    ReportMessage {
        from,
        to,
        subject: subject_line(digest, config),
        text_body: text_body(digest, parsed, config),
        html_body: html_body(digest, parsed, config),
    }
}

fn subject_line(digest: &Digest, config: &Config) -> String {
    match (digest.earliest, digest.latest) {
        (Some(start), Some(end)) => {
            let start = local_date(start, config.timezone);
            let end = local_date(end, config.timezone);
            let span = if start == end {
                start
            } else {
                format!("{start} to {end}")
            };
            format!(
                "{}: {} ({span})",
                config.sheet_name,
                count_phrase(digest.entry_count)
            )
        }
        _ => format!("{}: no entries", config.sheet_name),
    }
}

fn text_body(digest: &Digest, parsed: &ParseOutput, config: &Config) -> String {
    let mut out = String::new();

    match (digest.earliest, digest.latest) {
        (Some(earliest), Some(latest)) => {
            out.push_str(&format!(
                "{} in \"{}\" / \"{}\" between {} and {} ({} time).\n",
                count_phrase(digest.entry_count),
                config.sheet_name,
                config.tab,
                local_time(earliest, config.timezone),
                local_time(latest, config.timezone),
                config.timezone,
            ));
        }
        _ => {
            out.push_str(&format!(
                "No entries in this period for \"{}\" / \"{}\".\n",
                config.sheet_name, config.tab
            ));
        }
    }

    if !digest.is_empty() {
        out.push_str("\nBy action:\n");
        for bucket in &digest.by_category {
            out.push_str(&format!("- {}\n", category_line(bucket)));
        }

        if let Some(profit) = digest.estimated_sell_profit {
            out.push_str(&format!("\nEstimated sell profit: {}\n", format_usd(profit)));
        }

        out.push_str("\nEntries:\n");
        for entry in &parsed.entries {
            out.push_str(&format!("- {}\n", entry_line(entry, config.timezone)));
        }
    }

    if !parsed.invalid.is_empty() {
        out.push_str("\nInvalid rows (excluded from the digest):\n");
        for failure in &parsed.invalid {
            out.push_str(&format!("- row {}: {}\n", failure.row_number, failure.reason));
        }
    }

    out
}

fn html_body(digest: &Digest, parsed: &ParseOutput, config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("<h2>{}</h2>\n", escape(&subject_line(digest, config))));

    if digest.is_empty() {
        out.push_str("<p>No entries in this period.</p>\n");
    } else {
        out.push_str("<ul>\n");
        for bucket in &digest.by_category {
            out.push_str(&format!("<li>{}</li>\n", escape(&category_line(bucket))));
        }
        out.push_str("</ul>\n");

        if let Some(profit) = digest.estimated_sell_profit {
            out.push_str(&format!(
                "<p>Estimated sell profit: <b>{}</b></p>\n",
                format_usd(profit)
            ));
        }

        out.push_str("<ul>\n");
        for entry in &parsed.entries {
            out.push_str(&format!(
                "<li>{}</li>\n",
                escape(&entry_line(entry, config.timezone))
            ));
        }
        out.push_str("</ul>\n");
    }

    if !parsed.invalid.is_empty() {
        out.push_str("<p>Invalid rows (excluded from the digest):</p>\n<ul>\n");
        for failure in &parsed.invalid {
            out.push_str(&format!(
                "<li>row {}: {}</li>\n",
                failure.row_number,
                escape(&failure.reason)
            ));
        }
        out.push_str("</ul>\n");
    }

    out
}

fn category_line(bucket: &CategoryBreakdown) -> String {
    let mut line = format!("{}: {}", bucket.category, bucket.count);
    if let Some(q) = bucket.total_quantity {
        line.push_str(&format!(", total qty {}", format_number(q)));
    }
    if let Some(n) = bucket.total_notional {
        line.push_str(&format!(", notional {}", format_usd(n)));
    }
    line
}

fn entry_line(entry: &LogEntry, tz: Tz) -> String {
    let mut line = format!(
        "[row {}] {} {} {}",
        entry.row_number,
        local_time(entry.timestamp, tz),
        entry.symbol,
        entry.action,
    );
    if let Some(q) = entry.quantity {
        line.push_str(&format!(" qty {}", format_number(q)));
    }
    if let Some(p) = entry.price {
        line.push_str(&format!(" @ {}", format_usd(p)));
    }
    if let Some(notes) = &entry.notes {
        line.push_str(&format!(" ({notes})"));
    }
    line
}

/// Zone-aware conversion of the stored instant, so DST transitions format
/// with the offset in force at that instant.
fn local_time(ts: DateTime<Utc>, tz: Tz) -> String {
    ts.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string()
}

fn local_date(ts: DateTime<Utc>, tz: Tz) -> String {
    ts.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

fn count_phrase(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{count} entries")
    }
}

pub fn format_usd(x: f64) -> String {
    if x < 0.0 {
        format!("-${:.2}", -x)
    } else {
        format!("${x:.2}")
    }
}

fn format_number(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd_sign_aware() {
        assert_eq!(format_usd(1234.5), "$1234.50");
        assert_eq!(format_usd(-12.0), "-$12.00");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_count_phrase_pluralizes() {
        assert_eq!(count_phrase(1), "1 entry");
        assert_eq!(count_phrase(0), "0 entries");
        assert_eq!(count_phrase(7), "7 entries");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}
