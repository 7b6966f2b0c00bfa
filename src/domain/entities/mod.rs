pub mod digest;
pub mod log_entry;
pub mod report;
