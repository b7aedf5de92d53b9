pub mod insights;
pub mod lending;
pub mod profile;
