// Library for tests to access modules

pub mod app;
pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod size;
pub mod sysinfo_repo;
