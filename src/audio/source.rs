use rodio::{ChannelCount, SampleRate, Source};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

/// Restarts the wrapped source from the top when it runs out and the shared
/// loop flag is set. Runs on the audio thread, so it only ever reads the flag.
pub struct LoopingSource<T: Source + Send + 'static> {
    inner: T,
    looping: Arc<AtomicBool>,
}

impl<T: Source + Send + 'static> LoopingSource<T> {
    pub fn new(inner: T, looping: Arc<AtomicBool>) -> Self {
        Self { inner, looping }
    }
}

impl<T: Source + Send + 'static> Source for LoopingSource<T> {
    fn current_span_len(&self) -> Option<usize> {
        self.inner.current_span_len()
    }

    fn channels(&self) -> ChannelCount {
        self.inner.channels()
    }

    fn sample_rate(&self) -> SampleRate {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        if self.looping.load(Ordering::Relaxed) {
            None
        } else {
            self.inner.total_duration()
        }
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.inner.try_seek(pos)
    }
}

impl<T: Source + Send + 'static> Iterator for LoopingSource<T> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if let Some(sample) = self.inner.next() {
            return Some(sample);
        }

        if !self.looping.load(Ordering::Relaxed) || self.inner.try_seek(Duration::ZERO).is_err() {
            return None;
        }
        // a source that is empty right after rewinding ends here
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodio::buffer::SamplesBuffer;

    fn clip() -> SamplesBuffer {
        SamplesBuffer::new(
            ChannelCount::try_from(1u16).unwrap(),
            SampleRate::try_from(8_000u32).unwrap(),
            vec![0.1, 0.2, 0.3],
        )
    }

    #[test]
    fn plays_once_when_not_looping() {
        let flag = Arc::new(AtomicBool::new(false));
        let samples: Vec<f32> = LoopingSource::new(clip(), flag).collect();
        assert_eq!(samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn wraps_around_while_looping_and_stops_when_cleared() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut source = LoopingSource::new(clip(), flag.clone());

        let first: Vec<f32> = source.by_ref().take(7).collect();
        assert_eq!(first, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.3, 0.1]);
        assert_eq!(source.total_duration(), None);

        flag.store(false, Ordering::Relaxed);
        let rest: Vec<f32> = source.collect();
        assert_eq!(rest, vec![0.2, 0.3]);
    }
}
