pub mod config;
pub mod dashboard;
pub mod event;
pub mod format;
