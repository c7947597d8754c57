pub mod commands;
pub mod config;
pub mod controller;
pub mod decoder;
pub mod error;
pub mod format;
pub mod playback;
pub mod progress;
pub mod source;
pub mod state;
pub mod system;
pub mod traits;
pub mod util;
