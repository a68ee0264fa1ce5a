//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;

use tempfile::TempDir;

/// An empty scratch "mp3". The id3 crate only needs a writable file to
/// attach a v2 tag to; no audio data is required for tag IO.
pub fn scratch_mp3(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("sample.mp3");
    File::create(&path).unwrap();
    path
}

/// A CBR MPEG-1 Layer III stream: 128 kbit/s, 44.1 kHz, stereo, silent
/// payloads. The first frame carries an "Info" tag with the frame count so
/// probing can report a duration.
pub fn cbr_mp3(dir: &TempDir, data_frames: u32) -> PathBuf {
    // 144 * 128000 / 44100, padding bit clear.
    const FRAME_LEN: usize = 417;
    const HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

    let mut first = vec![0u8; FRAME_LEN];
    first[..4].copy_from_slice(&HEADER);
    // The Info tag sits after the 32-byte side info of an MPEG-1 stereo frame.
    first[36..40].copy_from_slice(b"Info");
    first[40..44].copy_from_slice(&1u32.to_be_bytes()); // frame-count flag
    first[44..48].copy_from_slice(&data_frames.to_be_bytes());

    let mut data = first;
    for _ in 0..data_frames {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&HEADER);
        data.extend_from_slice(&frame);
    }

    let path = dir.path().join("tone.mp3");
    std::fs::write(&path, data).unwrap();
    path
}
