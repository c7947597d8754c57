use std::time::Duration;

use crate::audio::state::Profile;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub profile: Profile,
    pub volume: u8,
    pub buffer_size: u32,
    pub refresh_interval: Duration,
    pub extensions: Vec<String>,
    pub start_looping: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Full,
            volume: 100,
            buffer_size: 4096,
            refresh_interval: Duration::from_millis(20),
            extensions: parse_extensions("*.wav;*.aif;*.aiff"),
            start_looping: false,
        }
    }
}

/// Turns a chooser filter like `*.wav;*.aif` into bare lowercase extensions.
pub fn parse_extensions(filter: &str) -> Vec<String> {
    filter
        .split([';', ','])
        .map(|pattern| {
            pattern
                .trim()
                .trim_start_matches('*')
                .trim_start_matches('.')
                .to_ascii_lowercase()
        })
        .filter(|ext| !ext.is_empty())
        .collect()
}
