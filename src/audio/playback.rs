use crate::{
    audio::{
        config::AudioConfig,
        decoder::{self, LoadedTrack},
        error::AudioError,
        progress::TrackProgress,
        traits::Transport,
        util::{construct_sink, setup_device_config},
    },
    event::events::Event,
};
use flume::Sender;
use rodio::{OutputStream, Sink};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};
use tracing::{debug, warn};

/// rodio-backed transport.
///
/// A paused sink with the track appended plays the role of a stopped
/// transport: `stop` keeps the position, `set_position` seeks. Every change of
/// the playing flag is announced with [`Event::TransportChanged`], including
/// the one the monitor thread raises when the track runs out.
pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Arc<Sink>,
    track: Option<LoadedTrack>,
    looping: Arc<AtomicBool>,
    playing: Arc<AtomicBool>,
    alive: Arc<AtomicBool>,
    progress: Arc<TrackProgress>,
    event_tx: Sender<Event>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<Event>, config: &AudioConfig) -> Result<Self, AudioError> {
        let (device, stream_config, sample_format) = setup_device_config(config.buffer_size)?;
        let (stream, sink) = construct_sink(device, &stream_config, sample_format)?;
        sink.pause();
        sink.set_volume(config.volume as f32 / 100.0);

        let engine = Self {
            _stream: stream,
            sink: Arc::new(sink),
            track: None,
            looping: Arc::new(AtomicBool::new(false)),
            playing: Arc::new(AtomicBool::new(false)),
            alive: Arc::new(AtomicBool::new(true)),
            progress: Arc::new(TrackProgress::new()),
            event_tx,
        };

        engine.start_monitor(config.refresh_interval);
        Ok(engine)
    }

    fn start_monitor(&self, interval: Duration) {
        let sink = self.sink.clone();
        let progress = self.progress.clone();
        let playing = self.playing.clone();
        let alive = self.alive.clone();
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            while alive.load(Ordering::Relaxed) {
                let (_, total) = progress.get_progress();
                let mut position = sink.get_pos().as_millis() as u64;
                if total > 0 && position > total {
                    position %= total;
                }
                progress.set_current_position(Duration::from_millis(position));

                if playing.load(Ordering::Relaxed) && sink.empty() {
                    playing.store(false, Ordering::Relaxed);
                    debug!("playback_track_drained");
                    if event_tx.send(Event::TransportChanged).is_err() {
                        break;
                    }
                }

                thread::sleep(interval);
            }
        });
    }

    pub fn progress(&self) -> &Arc<TrackProgress> {
        &self.progress
    }

    fn notify(&self) {
        let _ = self.event_tx.send(Event::TransportChanged);
    }

    /// Puts the bound track back into a sink that has played it to the end.
    fn reload(&mut self) -> Result<(), AudioError> {
        let Some(track) = &self.track else {
            return Err(AudioError::NoFileSelected);
        };

        let source = decoder::open_source(track, self.looping.clone()).inspect_err(|e| {
            warn!(error = %e, "playback_reload_failed");
        })?;
        if !self.playing.load(Ordering::Relaxed) {
            self.sink.pause();
        }
        self.sink.append(source);
        Ok(())
    }
}

impl Transport for PlaybackEngine {
    fn bind(&mut self, track: &LoadedTrack) -> Result<(), AudioError> {
        let source = decoder::open_source(track, self.looping.clone())?;

        self.playing.store(false, Ordering::Relaxed);
        self.sink.clear();
        self.sink.pause();
        self.sink.append(source);

        self.progress.reset();
        self.progress.set_total_duration(track.duration);
        self.track = Some(track.clone());
        self.notify();
        Ok(())
    }

    fn start(&mut self) -> Result<(), AudioError> {
        if self.sink.empty() {
            self.reload()?;
        }

        self.sink.play();
        self.playing.store(true, Ordering::Relaxed);
        self.notify();
        Ok(())
    }

    fn stop(&mut self) {
        self.sink.pause();
        self.playing.store(false, Ordering::Relaxed);
        self.notify();
    }

    fn set_position(&mut self, position: Duration) {
        if self.sink.empty() && self.reload().is_err() {
            return;
        }

        if let Err(e) = self.sink.try_seek(position) {
            warn!(error = %e, position_ms = position.as_millis() as u64, "playback_seek_failed");
        }
        self.progress.set_current_position(position);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping.store(looping, Ordering::Relaxed);
    }

    fn position(&self) -> Duration {
        self.progress.position()
    }
}

impl Drop for PlaybackEngine {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
        self.sink.clear();
    }
}
