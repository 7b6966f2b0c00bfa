pub mod parse;
pub mod render;
pub mod report;
pub mod summarize;
