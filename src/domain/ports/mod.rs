pub mod mailer;
pub mod sheet_source;
