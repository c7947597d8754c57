use std::time::Duration;

use tracing::{debug, info, warn};

use crate::audio::{
    commands::TransportEvent,
    decoder::LoadedTrack,
    error::AudioError,
    state::{Controls, Features, PlaybackState},
    traits::Transport,
};

/// Keeps [`PlaybackState`] in line with what the user asked for and what the
/// transport is actually doing.
///
/// All input goes through [`TransportController::request_transition`]:
/// button clicks as well as the transport's own change notifications. Entry
/// actions run once, when a state is entered, never when it is re-requested.
pub struct TransportController<T: Transport> {
    transport: T,
    state: PlaybackState,
    features: Features,
    track: Option<LoadedTrack>,
    looping: bool,
}

impl<T: Transport> TransportController<T> {
    pub fn new(transport: T, features: Features) -> Self {
        Self {
            transport,
            state: PlaybackState::Stopped,
            features,
            track: None,
            looping: false,
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Binds a freshly opened track and announces it to the machine.
    ///
    /// Loading while something is playing behaves like stop + reload: the
    /// machine ends up in `Stopped` with the new track ready.
    pub fn load(&mut self, track: LoadedTrack) -> Result<Option<PlaybackState>, AudioError> {
        self.transport.bind(&track)?;
        info!(path = %track.path.display(), "transport_track_bound");
        self.track = Some(track);
        Ok(self.request_transition(TransportEvent::OpenSucceeded))
    }

    /// Feeds one event through the transition table.
    ///
    /// Returns the new state when the event caused a transition.
    pub fn request_transition(&mut self, event: TransportEvent) -> Option<PlaybackState> {
        match event {
            TransportEvent::LoopToggled => {
                self.toggle_loop();
                return None;
            }
            TransportEvent::OpenSucceeded => self.apply_loop(),
            _ => {}
        }

        match self.next_state(event) {
            Some(next) => self.change_state(next, event),
            None => {
                debug!(state = %self.state, event = %event, "transport_event_ignored");
                None
            }
        }
    }

    /// Change notification from the transport.
    pub fn on_transport_changed(&mut self) -> Option<PlaybackState> {
        let event = if self.transport.is_playing() {
            TransportEvent::TransportStarted
        } else {
            TransportEvent::TransportStopped
        };
        self.request_transition(event)
    }

    fn next_state(&self, event: TransportEvent) -> Option<PlaybackState> {
        use PlaybackState::*;
        use TransportEvent::*;

        let playing = self.transport.is_playing();
        match (self.state, event) {
            (Stopped | Paused, PlayClicked) if self.track.is_some() => Some(Starting),
            (Playing, PlayClicked) if self.features.pause => Some(Pausing),
            (_, TransportStarted) if playing => Some(Playing),
            (Stopping | Playing, TransportStopped) if !playing => Some(Stopped),
            (Pausing, TransportStopped) if !playing => Some(Paused),
            (Paused, StopClicked) => Some(Stopped),
            (_, StopClicked) => Some(Stopping),
            (_, OpenSucceeded) => Some(Stopped),
            _ => None,
        }
    }

    fn change_state(&mut self, next: PlaybackState, event: TransportEvent) -> Option<PlaybackState> {
        if next == self.state {
            return None;
        }

        info!(from = %self.state, to = %next, event = %event, "transport_transition");
        self.state = next;

        match next {
            PlaybackState::Stopped => self.transport.set_position(Duration::ZERO),
            PlaybackState::Starting => {
                self.apply_loop();
                if let Err(e) = self.transport.start() {
                    warn!(error = %e, "transport_start_failed");
                    return self.change_state(PlaybackState::Stopped, event);
                }
            }
            PlaybackState::Pausing | PlaybackState::Stopping => self.transport.stop(),
            PlaybackState::Playing | PlaybackState::Paused => {}
        }

        Some(next)
    }

    fn toggle_loop(&mut self) {
        if !self.features.looping {
            return;
        }
        self.looping = !self.looping;
        debug!(looping = self.looping, "transport_loop_toggled");
        self.apply_loop();
    }

    fn apply_loop(&mut self) {
        if self.features.looping && self.track.is_some() {
            self.transport.set_looping(self.looping);
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn controls(&self) -> Controls {
        Controls::derive(self.state, self.features, self.track.is_some())
    }

    pub fn features(&self) -> Features {
        self.features
    }

    pub fn track(&self) -> Option<&LoadedTrack> {
        self.track.as_ref()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    #[cfg(test)]
    fn force_state(&mut self, state: PlaybackState) {
        self.state = state;
    }
}
