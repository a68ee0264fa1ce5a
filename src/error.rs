//! Error type shared across the library.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A frame was addressed by an ID or name that is not in the reference
    /// tables (see [`crate::info`]).
    #[error("unknown frame ID or name {0:?}")]
    UnknownFrame(String),

    /// The frame exists but does not carry a plain text field, so the text
    /// accessors cannot be used on it (e.g. APIC, or TXXX which needs a
    /// description alongside its value).
    #[error("frame {0} has no settable text field; use the dedicated accessor")]
    NotTextual(&'static str),

    /// The file was probed but no decodable audio track was found.
    #[error("{}: no decodable audio track", path.display())]
    NoAudioTrack { path: PathBuf },

    #[error(transparent)]
    Id3(#[from] id3::Error),

    #[error(transparent)]
    Probe(#[from] symphonia::core::errors::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
