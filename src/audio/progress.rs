use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Position and length of the bound track, written by the monitor thread and
/// read by the UI without touching the sink.
#[derive(Default, Debug)]
pub struct TrackProgress {
    current_position_millis: AtomicU64,
    total_duration_millis: AtomicU64,
}

impl TrackProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_position(&self, position: Duration) {
        self.current_position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn set_total_duration(&self, duration: Option<Duration>) {
        let millis = duration.map_or(0, |d| d.as_millis() as u64);
        self.total_duration_millis.store(millis, Ordering::Relaxed);
    }

    pub fn get_progress(&self) -> (u64, u64) {
        (
            self.current_position_millis.load(Ordering::Relaxed),
            self.total_duration_millis.load(Ordering::Relaxed),
        )
    }

    pub fn position(&self) -> Duration {
        Duration::from_millis(self.current_position_millis.load(Ordering::Relaxed))
    }

    pub fn ratio(&self) -> f64 {
        let (current, total) = self.get_progress();
        if total == 0 {
            0.0
        } else {
            (current as f64 / total as f64).min(1.0)
        }
    }

    pub fn reset(&self) {
        self.set_current_position(Duration::ZERO);
        self.set_total_duration(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped_and_safe_without_length() {
        let progress = TrackProgress::new();
        progress.set_current_position(Duration::from_secs(5));
        assert_eq!(progress.ratio(), 0.0);

        progress.set_total_duration(Some(Duration::from_secs(10)));
        assert_eq!(progress.ratio(), 0.5);

        progress.set_current_position(Duration::from_secs(12));
        assert_eq!(progress.ratio(), 1.0);

        progress.reset();
        assert_eq!(progress.get_progress(), (0, 0));
    }
}
