use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Starting,
    Playing,
    Pausing,
    Paused,
    Stopping,
}

impl PlaybackState {
    pub const ALL: [PlaybackState; 6] = [
        PlaybackState::Stopped,
        PlaybackState::Starting,
        PlaybackState::Playing,
        PlaybackState::Pausing,
        PlaybackState::Paused,
        PlaybackState::Stopping,
    ];
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackState::Stopped => "stopped",
            PlaybackState::Starting => "starting",
            PlaybackState::Playing => "playing",
            PlaybackState::Pausing => "pausing",
            PlaybackState::Paused => "paused",
            PlaybackState::Stopping => "stopping",
        };
        f.write_str(name)
    }
}

/// Which parts of the player are switched on.
///
/// Earlier, simpler revisions of the deck are subsets of the full one, so
/// they are expressed as feature sets rather than separate machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub pause: bool,
    pub labels: bool,
    pub looping: bool,
    pub position: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Open, Play and Stop only. Play always starts over.
    Basic,
    /// Adds pause/resume and relabels the buttons to match.
    Pausable,
    #[default]
    Full,
}

impl Profile {
    pub fn features(self) -> Features {
        match self {
            Profile::Basic => Features {
                pause: false,
                labels: false,
                looping: false,
                position: false,
            },
            Profile::Pausable => Features {
                pause: true,
                labels: true,
                looping: false,
                position: false,
            },
            Profile::Full => Features {
                pause: true,
                labels: true,
                looping: true,
                position: true,
            },
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" | "v1" => Some(Profile::Basic),
            "pausable" | "v2" => Some(Profile::Pausable),
            "full" | "v3" => Some(Profile::Full),
            _ => None,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Profile::default().features()
    }
}

/// What the control row should look like for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub play_label: &'static str,
    pub play_enabled: bool,
    pub stop_label: &'static str,
    pub stop_enabled: bool,
    pub loop_enabled: bool,
}

impl Controls {
    pub fn derive(state: PlaybackState, features: Features, track_loaded: bool) -> Self {
        let (play_label, stop_label) = if features.labels {
            match state {
                PlaybackState::Stopped | PlaybackState::Starting => ("Play", "Stop"),
                PlaybackState::Playing | PlaybackState::Pausing | PlaybackState::Stopping => {
                    ("Pause", "Stop")
                }
                PlaybackState::Paused => ("Resume", "Return to Zero"),
            }
        } else {
            ("Play", "Stop")
        };

        let play_enabled = track_loaded
            && match state {
                PlaybackState::Stopped | PlaybackState::Paused => true,
                PlaybackState::Playing => features.pause,
                _ => false,
            };

        let stop_enabled = matches!(
            state,
            PlaybackState::Playing
                | PlaybackState::Pausing
                | PlaybackState::Paused
                | PlaybackState::Stopping
        );

        Self {
            play_label,
            play_enabled,
            stop_label,
            stop_enabled,
            loop_enabled: features.looping,
        }
    }
}
