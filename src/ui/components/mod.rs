pub mod app;
pub mod browser;
pub mod controls;
pub mod progress;
