use std::{path::PathBuf, time::Duration};

use deckplay::audio::{
    commands::TransportEvent,
    controller::TransportController,
    decoder::LoadedTrack,
    error::AudioError,
    format::elapsed_label,
    state::{PlaybackState, Profile},
    traits::Transport,
};

/// Transport double whose change notifications queue up until delivered,
/// the way an event loop would hand them over later.
#[derive(Default)]
struct QueuedTransport {
    playing: bool,
    position: Duration,
    looping: bool,
    pending: usize,
}

impl Transport for QueuedTransport {
    fn bind(&mut self, _track: &LoadedTrack) -> Result<(), AudioError> {
        self.playing = false;
        self.position = Duration::ZERO;
        self.pending += 1;
        Ok(())
    }

    fn start(&mut self) -> Result<(), AudioError> {
        self.playing = true;
        self.pending += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = false;
        self.pending += 1;
    }

    fn set_position(&mut self, position: Duration) {
        self.position = position;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn position(&self) -> Duration {
        self.position
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Open,
    Play,
    Stop,
    Loop,
    Deliver,
}

const STEPS: [Step; 5] = [Step::Open, Step::Play, Step::Stop, Step::Loop, Step::Deliver];

fn track() -> LoadedTrack {
    LoadedTrack::new(
        PathBuf::from("take.wav"),
        48_000,
        2,
        Some(Duration::from_secs(10)),
    )
}

fn deliver(c: &mut TransportController<QueuedTransport>) {
    while c.transport().pending > 0 {
        c.transport_mut().pending -= 1;
        c.on_transport_changed();
    }
}

fn apply(c: &mut TransportController<QueuedTransport>, step: Step) {
    match step {
        Step::Open => {
            c.load(track()).unwrap();
        }
        Step::Play => {
            if c.controls().play_enabled {
                c.request_transition(TransportEvent::PlayClicked);
            }
        }
        Step::Stop => {
            if c.controls().stop_enabled {
                c.request_transition(TransportEvent::StopClicked);
            }
        }
        Step::Loop => {
            c.request_transition(TransportEvent::LoopToggled);
        }
        Step::Deliver => deliver(c),
    }
}

#[test]
fn full_pause_cycle_from_the_user_side() {
    let mut c = TransportController::new(QueuedTransport::default(), Profile::Full.features());
    c.load(track()).unwrap();
    deliver(&mut c);

    assert_eq!(
        c.request_transition(TransportEvent::PlayClicked),
        Some(PlaybackState::Starting)
    );
    deliver(&mut c);
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.controls().play_label, "Pause");

    c.transport_mut().position = Duration::from_millis(125_999);
    assert_eq!(
        elapsed_label(c.transport().position(), c.transport().is_playing()),
        "02:05:999"
    );

    c.request_transition(TransportEvent::PlayClicked);
    assert_eq!(c.state(), PlaybackState::Pausing);
    deliver(&mut c);
    assert_eq!(c.state(), PlaybackState::Paused);
    assert_eq!(c.transport().position(), Duration::from_millis(125_999));

    c.request_transition(TransportEvent::StopClicked);
    assert_eq!(c.state(), PlaybackState::Stopped);
    assert_eq!(c.transport().position(), Duration::ZERO);
    assert_eq!(
        elapsed_label(c.transport().position(), c.transport().is_playing()),
        "Stopped"
    );
}

#[test]
fn loop_flag_reaches_the_transport_on_load_and_on_start() {
    let mut c = TransportController::new(QueuedTransport::default(), Profile::Full.features())
        .with_looping(true);
    c.load(track()).unwrap();
    assert!(c.transport().looping);

    c.transport_mut().looping = false;
    c.request_transition(TransportEvent::PlayClicked);
    assert!(c.transport().looping);
}

#[test]
fn every_short_session_settles_consistently() {
    for profile in [Profile::Basic, Profile::Pausable, Profile::Full] {
        let features = profile.features();
        let total = STEPS.len().pow(5);

        for mut code in 0..total {
            let mut c = TransportController::new(QueuedTransport::default(), features);
            let mut script = Vec::new();

            for _ in 0..5 {
                let step = STEPS[code % STEPS.len()];
                code /= STEPS.len();
                script.push(step);
                apply(&mut c, step);

                let controls = c.controls();
                assert_eq!(
                    controls.stop_enabled,
                    matches!(
                        c.state(),
                        PlaybackState::Playing
                            | PlaybackState::Pausing
                            | PlaybackState::Paused
                            | PlaybackState::Stopping
                    ),
                    "{script:?}"
                );
                if controls.play_enabled {
                    assert!(c.track().is_some(), "{script:?}");
                }
                if !features.pause {
                    assert!(
                        !matches!(c.state(), PlaybackState::Pausing | PlaybackState::Paused),
                        "{script:?}"
                    );
                }
            }

            deliver(&mut c);
            let state = c.state();
            assert!(
                !matches!(
                    state,
                    PlaybackState::Starting | PlaybackState::Pausing | PlaybackState::Stopping
                ),
                "{profile:?} {script:?} left {state}"
            );
            assert_eq!(
                state == PlaybackState::Playing,
                c.transport().is_playing(),
                "{profile:?} {script:?}"
            );
        }
    }
}
