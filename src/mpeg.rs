//! MPEG stream properties (Symphonia probe).
//!
//! Companion to the tag side: the header info of the audio stream itself.
//! Probing stops at the container/codec parameters, no decoding happens.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use crate::error::{Error, Result};

/// Stream-level properties of an audio file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpegInfo {
    pub sample_rate: Option<u32>,
    pub channels: Option<usize>,
    pub duration_ms: Option<u64>,
    /// Average bit rate in bits per second, derived from file size and
    /// duration. Includes tag overhead, so treat it as an estimate.
    pub bitrate: Option<u32>,
}

impl MpegInfo {
    /// Probe `path` and report the default track's properties.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let byte_len = std::fs::metadata(path)?.len();

        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;

        let track = probed
            .format
            .default_track()
            .ok_or_else(|| Error::NoAudioTrack {
                path: path.to_path_buf(),
            })?;

        let params = &track.codec_params;
        let duration_ms = duration_from_params(params.time_base, params.n_frames);
        let bitrate = duration_ms
            .filter(|&ms| ms > 0)
            .map(|ms| ((byte_len as f64) * 8.0 * 1000.0 / (ms as f64)).round() as u32);

        Ok(Self {
            sample_rate: params.sample_rate,
            channels: params.channels.map(|c| c.count()),
            duration_ms,
            bitrate,
        })
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }
}

/// Duration from time_base + n_frames when the codec parameters carry both.
fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<u64> {
    let tb = time_base?;
    let frames = n_frames?;

    let t = tb.calc_time(frames);
    // Time is { seconds: u64, frac: f64 } in symphonia 0.5.x.
    let ms = (t.seconds as f64 * 1000.0) + (t.frac * 1000.0);
    Some(ms.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_needs_both_params() {
        assert_eq!(duration_from_params(None, Some(44100)), None);
        assert_eq!(duration_from_params(Some(TimeBase::new(1, 44100)), None), None);
        assert_eq!(
            duration_from_params(Some(TimeBase::new(1, 44100)), Some(44100)),
            Some(1000)
        );
    }

    #[test]
    fn read_rejects_non_audio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_audio.mp3");
        std::fs::write(&path, b"definitely not an mpeg stream").unwrap();
        assert!(MpegInfo::read(&path).is_err());
    }
}
