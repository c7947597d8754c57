use crate::{
    audio::{
        commands::TransportEvent,
        config::AudioConfig,
        controller::TransportController,
        decoder::{self, LoadedTrack},
        error::AudioError,
        format::elapsed_label,
        playback::PlaybackEngine,
        progress::TrackProgress,
        state::{Controls, Features, PlaybackState},
        traits::Transport,
    },
    event::events::Event,
};
use flume::Sender;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, warn};

/// The player as the UI sees it: buttons in, labels out.
pub struct AudioSystem<T: Transport = PlaybackEngine> {
    controller: TransportController<T>,
    progress: Arc<TrackProgress>,
    config: AudioConfig,
}

impl AudioSystem {
    pub fn new(event_tx: Sender<Event>, config: AudioConfig) -> color_eyre::Result<Self> {
        let engine = PlaybackEngine::new(event_tx, &config)?;
        let progress = engine.progress().clone();
        Ok(Self::with_transport(engine, progress, config))
    }
}

impl<T: Transport> AudioSystem<T> {
    pub fn with_transport(transport: T, progress: Arc<TrackProgress>, config: AudioConfig) -> Self {
        let controller = TransportController::new(transport, config.profile.features())
            .with_looping(config.start_looping);

        Self {
            controller,
            progress,
            config,
        }
    }

    /// Completion of the file chooser. Dismissing it changes nothing.
    pub fn file_chosen(&mut self, path: Option<PathBuf>) {
        let result = match path {
            Some(path) => self.open_file(&path),
            None => Err(AudioError::NoFileSelected),
        };

        match result {
            Ok(()) => {}
            Err(AudioError::NoFileSelected) => debug!("audio_open_cancelled"),
            Err(e) => warn!(error = %e, "audio_open_ignored"),
        }
    }

    pub fn open_file(&mut self, path: &Path) -> Result<(), AudioError> {
        let track = decoder::probe(path)?;
        self.controller.load(track)?;
        Ok(())
    }

    pub fn play_clicked(&mut self) -> Option<PlaybackState> {
        self.controller.request_transition(TransportEvent::PlayClicked)
    }

    pub fn stop_clicked(&mut self) -> Option<PlaybackState> {
        self.controller.request_transition(TransportEvent::StopClicked)
    }

    pub fn toggle_loop(&mut self) {
        self.controller.request_transition(TransportEvent::LoopToggled);
    }

    pub fn on_transport_changed(&mut self) -> Option<PlaybackState> {
        self.controller.on_transport_changed()
    }

    pub fn controls(&self) -> Controls {
        self.controller.controls()
    }

    pub fn position_label(&self) -> String {
        let transport = self.controller.transport();
        elapsed_label(transport.position(), transport.is_playing())
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn features(&self) -> Features {
        self.controller.features()
    }

    pub fn track(&self) -> Option<&LoadedTrack> {
        self.controller.track()
    }

    pub fn is_looping(&self) -> bool {
        self.controller.is_looping()
    }

    pub fn progress(&self) -> &Arc<TrackProgress> {
        &self.progress
    }

    pub fn extensions(&self) -> &[String] {
        &self.config.extensions
    }
}
