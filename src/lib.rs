//! id3tag — a convenience layer over the [`id3`] crate.
//!
//! What lives here:
//! - [`TagFile`]: link an MP3, edit frames in memory, write back in one go.
//!   Frames are addressable by standard ID ("TIT2") or friendly name
//!   ("title"), with accessors for the common text frames, comments and
//!   user-text (TXXX) frames.
//! - [`info`]: reference tables for frame kinds, their fields, and the
//!   ID3v1 genre list.
//! - [`MpegInfo`]: stream properties (bitrate, sample rate, duration) via
//!   Symphonia probing.
//!
//! What does NOT live here: the binary tag codec. Frame encoding, header
//! parsing, unsynchronization and padding are all delegated to the `id3`
//! crate, and stream demuxing to `symphonia`.
//!
//! The `id3tag` binary built on top of this exposes `create`, `print`,
//! `strip` and `info` subcommands.

pub mod error;
pub mod frame;
pub mod info;
pub mod mpeg;
pub mod tag;
mod util;

pub use error::{Error, Result};
pub use frame::{FrameView, frame_text};
pub use info::{FRAMES, Field, FrameInfo, GENRES, frame_info, genre_index};
pub use mpeg::MpegInfo;
pub use tag::{StripOutcome, TagFile};

// Re-exported so callers picking a write version don't need a direct `id3`
// dependency.
pub use id3::Version;
