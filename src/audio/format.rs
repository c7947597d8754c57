use std::time::Duration;

/// Readout for the position label: `MM:SS:mmm` while playing, `Stopped`
/// otherwise.
pub fn elapsed_label(position: Duration, playing: bool) -> String {
    if !playing {
        return "Stopped".to_string();
    }

    let millis = position.as_millis();
    let minutes = millis / 60_000;
    let seconds = (millis / 1000) % 60;
    let millis = millis % 1000;
    format!("{minutes:02}:{seconds:02}:{millis:03}")
}

pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
