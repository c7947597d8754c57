use crate::audio::{decoder::LoadedTrack, error::AudioError};
use std::time::Duration;

/// A playback engine the transport state machine can drive.
///
/// `start` and `stop` only ask; the engine reports that it actually started
/// or stopped through a change notification, after which `is_playing` tells
/// which one happened. A `start` that cannot even be attempted, such as a
/// track that can no longer be read, fails straight away instead.
pub trait Transport {
    fn bind(&mut self, track: &LoadedTrack) -> Result<(), AudioError>;
    fn start(&mut self) -> Result<(), AudioError>;
    fn stop(&mut self);
    fn set_position(&mut self, position: Duration);
    fn is_playing(&self) -> bool;
    fn set_looping(&mut self, looping: bool);
    fn position(&self) -> Duration;
}
