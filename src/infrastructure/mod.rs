pub mod email;
pub mod sheets;
