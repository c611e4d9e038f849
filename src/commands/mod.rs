// Command handlers module
pub mod dashboard;
pub mod report;
