use std::{path::PathBuf, str::FromStr, time::Duration};

use tracing::warn;

use crate::audio::{
    config::{AudioConfig, parse_extensions},
    state::Profile,
};

pub const PROFILE_ENV: &str = "DECKPLAY_PROFILE";
pub const EXTENSIONS_ENV: &str = "DECKPLAY_EXTENSIONS";
pub const REFRESH_ENV: &str = "DECKPLAY_REFRESH_MS";
pub const BUFFER_ENV: &str = "DECKPLAY_BUFFER_SIZE";
pub const VOLUME_ENV: &str = "DECKPLAY_VOLUME";
pub const LOOP_ENV: &str = "DECKPLAY_LOOP";
pub const START_DIR_ENV: &str = "DECKPLAY_START_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub audio: AudioConfig,
    pub start_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
            start_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl AppConfig {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let audio = &mut config.audio;

        if let Some(value) = lookup(PROFILE_ENV) {
            match Profile::parse(&value) {
                Some(profile) => audio.profile = profile,
                None => warn!(key = PROFILE_ENV, value = value.as_str(), "config_invalid_value"),
            }
        }

        if let Some(value) = lookup(EXTENSIONS_ENV) {
            let extensions = parse_extensions(&value);
            if extensions.is_empty() {
                warn!(key = EXTENSIONS_ENV, value = value.as_str(), "config_invalid_value");
            } else {
                audio.extensions = extensions;
            }
        }

        if let Some(millis) = parse_number::<u64>(&lookup, REFRESH_ENV).filter(|ms| *ms > 0) {
            audio.refresh_interval = Duration::from_millis(millis);
        }
        if let Some(frames) = parse_number::<u32>(&lookup, BUFFER_ENV).filter(|f| *f > 0) {
            audio.buffer_size = frames;
        }
        if let Some(volume) = parse_number::<u8>(&lookup, VOLUME_ENV) {
            audio.volume = volume.min(100);
        }

        if let Some(value) = lookup(LOOP_ENV) {
            audio.start_looping = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(dir) = lookup(START_DIR_ENV) {
            let dir = PathBuf::from(dir);
            if dir.is_dir() {
                config.start_dir = dir;
            } else {
                warn!(key = START_DIR_ENV, path = %dir.display(), "config_invalid_value");
            }
        }

        config
    }
}

fn parse_number<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!(key, value = value.as_str(), "config_invalid_value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config(&[]);
        assert_eq!(config.audio, AudioConfig::default());
        assert_eq!(config.audio.refresh_interval, Duration::from_millis(20));
        assert_eq!(config.audio.extensions, vec!["wav", "aif", "aiff"]);
    }

    #[test]
    fn reads_every_setting() {
        let dir = tempfile::tempdir().unwrap();
        let start = dir.path().to_string_lossy().into_owned();
        let config = config(&[
            (PROFILE_ENV, "basic"),
            (EXTENSIONS_ENV, "*.wav"),
            (REFRESH_ENV, "50"),
            (BUFFER_ENV, "1024"),
            (VOLUME_ENV, "150"),
            (LOOP_ENV, "yes"),
            (START_DIR_ENV, start.as_str()),
        ]);

        assert_eq!(config.audio.profile, Profile::Basic);
        assert_eq!(config.audio.extensions, vec!["wav"]);
        assert_eq!(config.audio.refresh_interval, Duration::from_millis(50));
        assert_eq!(config.audio.buffer_size, 1024);
        assert_eq!(config.audio.volume, 100);
        assert!(config.audio.start_looping);
        assert_eq!(config.start_dir, dir.path());
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config(&[
            (PROFILE_ENV, "deluxe"),
            (EXTENSIONS_ENV, ";;"),
            (REFRESH_ENV, "0"),
            (BUFFER_ENV, "lots"),
            (START_DIR_ENV, "/definitely/not/here"),
        ]);
        let defaults = AppConfig::default();

        assert_eq!(config.audio, AudioConfig::default());
        assert_eq!(config.start_dir, defaults.start_dir);
    }
}
