mod common;

use common::{rows, test_config};
use logdigest::application::parse::parse_rows;
use logdigest::application::render::render;
use logdigest::application::summarize::summarize;

const HEADER: &[&str] = &["date", "symbol", "action", "qty", "price", "notes"];

fn render_cells(cells: &[&[&str]]) -> logdigest::domain::entities::report::ReportMessage {
    let parsed = parse_rows(&rows(cells)).unwrap();
    let digest = summarize(&parsed.entries, parsed.invalid.len());
    render(
        &digest,
        &parsed,
        &test_config(),
        "alerts@example.com".into(),
        vec!["me@example.com".into()],
    )
}

#[test]
fn test_identical_inputs_render_byte_identical_output() {
    let cells: &[&[&str]] = &[
        HEADER,
        &["2024-03-10 09:30", "AAPL", "buy", "10", "172.50", ""],
        &["2024-03-11 10:00", "NVDA", "sell", "2", "900", "Gain 5%"],
        &["bad", "X", "buy", "", "", ""],
    ];
    let a = render_cells(cells);
    let b = render_cells(cells);
    assert_eq!(a.subject, b.subject);
    assert_eq!(a.text_body, b.text_body);
    assert_eq!(a.html_body, b.html_body);
}

#[test]
fn test_subject_single_entry_and_single_day() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 09:30", "AAPL", "buy", "10", "172.50", ""],
    ]);
    // 09:30 UTC on 2024-03-10 is still 2024-03-10 in America/Denver.
    assert_eq!(message.subject, "Trading Log: 1 entry (2024-03-10)");
    assert!(message.subject.contains("1 entr"));
}

#[test]
fn test_subject_spans_multiple_local_dates() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 12:00", "AAPL", "buy", "", "", ""],
        &["2024-03-12 12:00", "AAPL", "sell", "", "", ""],
    ]);
    assert_eq!(
        message.subject,
        "Trading Log: 2 entries (2024-03-10 to 2024-03-12)"
    );
}

#[test]
fn test_empty_digest_renders_no_entries_report() {
    let message = render_cells(&[HEADER]);
    assert_eq!(message.subject, "Trading Log: no entries");
    assert!(message.text_body.contains("No entries in this period"));
    assert!(message.html_body.contains("No entries in this period"));
}

#[test]
fn test_invalid_rows_section_lists_index_and_reason() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 09:30", "AAPL", "buy", "10", "172.50", ""],
        &["2024-03-10 10:00", "MSFT", "buy", "1", "abc", ""],
    ]);
    assert!(message.text_body.contains("Invalid rows"));
    assert!(message.text_body.contains("row 3"));
    assert!(message.text_body.contains("abc"));
}

#[test]
fn test_no_invalid_section_when_all_rows_parse() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 09:30", "AAPL", "buy", "10", "172.50", ""],
    ]);
    assert!(!message.text_body.contains("Invalid rows"));
}

#[test]
fn test_category_breakdown_in_stable_order() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 09:00", "NVDA", "sell", "", "", ""],
        &["2024-03-10 10:00", "AAPL", "buy", "", "", ""],
    ]);
    let sell_pos = message.text_body.find("- sell: 1").unwrap();
    let buy_pos = message.text_body.find("- buy: 1").unwrap();
    assert!(sell_pos < buy_pos);
}

#[test]
fn test_timestamps_render_with_dst_correct_offsets() {
    // US mountain time switched to DST at 2024-03-10 02:00 local.
    let message = render_cells(&[
        HEADER,
        &["2024-03-09 12:00", "AAPL", "buy", "", "", ""],
        &["2024-03-11 12:00", "AAPL", "sell", "", "", ""],
    ]);
    assert!(message.text_body.contains("2024-03-09 05:00 MST"));
    assert!(message.text_body.contains("2024-03-11 06:00 MDT"));
}

#[test]
fn test_profit_line_rendered_as_usd() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 09:00", "AAPL", "sell", "10", "110", "Gain 10%"],
    ]);
    // 1100 * 0.1/1.1 = 100.00
    assert!(message.text_body.contains("Estimated sell profit: $100.00"));
}

#[test]
fn test_html_body_escapes_note_markup() {
    let message = render_cells(&[
        HEADER,
        &["2024-03-10 09:00", "AAPL", "note", "", "", "watch <b>this</b>"],
    ]);
    assert!(message.html_body.contains("&lt;b&gt;"));
    assert!(!message.html_body.contains("<b>this</b>"));
}
