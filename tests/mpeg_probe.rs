//! Probe tests against a real (if tiny) MPEG stream.

mod common;

use id3tag::{MpegInfo, TagFile};
use tempfile::TempDir;

#[test]
fn probes_stream_properties() {
    let dir = TempDir::new().unwrap();
    let path = common::cbr_mp3(&dir, 39);

    let info = MpegInfo::read(&path).unwrap();
    assert_eq!(info.sample_rate, Some(44100));
    assert_eq!(info.channels, Some(2));

    // 39 frames of 1152 samples at 44.1 kHz is roughly one second.
    let ms = info.duration_ms.unwrap();
    assert!((500..1500).contains(&ms), "duration {ms} ms");
    assert!(info.bitrate.unwrap() > 0);
    assert_eq!(info.duration(), Some(std::time::Duration::from_millis(ms)));
}

#[test]
fn tagging_does_not_break_probing() {
    let dir = TempDir::new().unwrap();
    let path = common::cbr_mp3(&dir, 39);

    let mut tag = TagFile::open(&path).unwrap();
    tag.set_title("Tone");
    tag.update().unwrap();

    // The probe skips the prepended ID3v2 tag.
    let info = MpegInfo::read(&path).unwrap();
    assert_eq!(info.sample_rate, Some(44100));
    assert_eq!(info.channels, Some(2));
}
