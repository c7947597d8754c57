use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::{Arc, atomic::AtomicBool},
    time::Duration,
};

use rodio::{Decoder, Source};
use tracing::debug;

use crate::audio::{error::AudioError, source::LoopingSource};

pub type FileDecoder = Decoder<BufReader<File>>;

/// A decodable audio file that has been opened at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTrack {
    pub path: PathBuf,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration: Option<Duration>,
}

impl LoadedTrack {
    pub fn new(path: PathBuf, sample_rate: u32, channels: u16, duration: Option<Duration>) -> Self {
        Self {
            path,
            sample_rate,
            channels,
            duration,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Checks that `path` decodes and reads its stream parameters.
pub fn probe(path: &Path) -> Result<LoadedTrack, AudioError> {
    let decoder = decode(path)?;
    let track = LoadedTrack::new(
        path.to_path_buf(),
        u32::from(decoder.sample_rate()),
        u16::from(decoder.channels()),
        decoder.total_duration(),
    );

    debug!(
        path = %path.display(),
        sample_rate = track.sample_rate,
        channels = track.channels,
        "decoder_probe_ok"
    );
    Ok(track)
}

/// Opens a fresh decoder for playback, wrapped so it can loop.
pub fn open_source(
    track: &LoadedTrack,
    looping: Arc<AtomicBool>,
) -> Result<LoopingSource<FileDecoder>, AudioError> {
    let decoder = decode(&track.path)?;
    Ok(LoopingSource::new(decoder, looping))
}

fn decode(path: &Path) -> Result<FileDecoder, AudioError> {
    let file = File::open(path).map_err(|e| AudioError::unreadable(path, e))?;
    let byte_len = file
        .metadata()
        .map_err(|e| AudioError::unreadable(path, e))?
        .len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(byte_len)
        .with_seekable(true);

    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        builder = builder.with_hint(ext);
    }

    builder.build().map_err(|e| AudioError::unreadable(path, e))
}
