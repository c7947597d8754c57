pub mod audio;
pub mod config;
pub mod event;
pub mod ui;
pub mod util;
