pub mod cli;
pub mod config;
pub mod dashboard;
pub mod navigation;
pub mod ui;
