//! The tag container: link a file, edit frames in memory, write back.
//!
//! [`TagFile`] pairs an on-disk path with its in-memory ID3v2 tag. The
//! lifecycle mirrors how tagging tools use it:
//!
//! ```no_run
//! use id3tag::TagFile;
//!
//! let mut tag = TagFile::open("talk.mp3")?;
//! tag.set_title("Talk");
//! tag.set_text("track", "5/13")?;
//! tag.update()?;
//! # Ok::<(), id3tag::Error>(())
//! ```
//!
//! Opening a file that carries no tag yet yields an empty container;
//! `update` then creates the tag. All frame encoding, header parsing and
//! padding management is the `id3` crate's job.

use std::path::{Path, PathBuf};

use id3::frame::{Comment, Content, ExtendedText, Frame, Lyrics};
use id3::{ErrorKind, Tag, TagLike, Version};
use tracing::debug;

use crate::error::{Error, Result};
use crate::frame::frame_text;
use crate::info::{self, FrameInfo};
use crate::util::{format_slash_pair, parse_slash_pair_u32};

/// Which tags [`TagFile::strip`] actually removed from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripOutcome {
    pub v1: bool,
    pub v2: bool,
}

impl StripOutcome {
    pub fn any(&self) -> bool {
        self.v1 || self.v2
    }
}

/// An ID3v2 tag bound to a file path.
pub struct TagFile {
    path: PathBuf,
    tag: Tag,
    had_tag: bool,
}

impl TagFile {
    /// Link `path` and read its ID3v2 tag.
    ///
    /// A file without a tag yields an empty container; every other failure
    /// (missing file, unreadable file, malformed tag) is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (tag, had_tag) = match Tag::read_from_path(path) {
            Ok(tag) => (tag, true),
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => (Tag::new(), false),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), had_tag, frames = tag.frames().count(), "linked file");

        Ok(Self {
            path: path.to_path_buf(),
            tag,
            had_tag,
        })
    }

    /// Remove ID3v1 and ID3v2 tags from a file, reporting which were found.
    pub fn strip(path: impl AsRef<Path>) -> Result<StripOutcome> {
        let path = path.as_ref();
        let v2 = Tag::remove_from_path(path)?;
        let v1 = id3::v1::Tag::remove_from_path(path)?;
        debug!(path = %path.display(), v1, v2, "stripped tags");
        Ok(StripOutcome { v1, v2 })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file carried an ID3v2 tag when it was opened.
    pub fn has_tag(&self) -> bool {
        self.had_tag
    }

    /// Frames in stored order. Appends go to the end, so iteration order is
    /// the order frames were added.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.tag.frames()
    }

    pub fn len(&self) -> usize {
        self.tag.frames().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- generic frame access -------------------------------------------

    /// Text of the frame addressed by ID (`"TIT2"`) or name (`"title"`),
    /// or `None` when the tag has no such frame.
    pub fn text(&self, id_or_name: &str) -> Result<Option<&str>> {
        let info = resolve(id_or_name)?;
        Ok(self.tag.get(info.id).and_then(frame_text))
    }

    /// Replace the frame addressed by `id_or_name` with one holding `value`.
    ///
    /// All frames with that ID are removed first. Works for plain text
    /// frames (T***), link frames (W***), COMM and USLT; frames without a
    /// single settable text field (TXXX, WXXX, APIC, ...) are rejected and
    /// have dedicated accessors instead.
    pub fn set_text(&mut self, id_or_name: &str, value: impl Into<String>) -> Result<()> {
        let info = resolve(id_or_name)?;
        match info.id {
            "COMM" => {
                self.tag.remove("COMM");
                self.add_comment(value);
            }
            "USLT" => {
                self.tag.remove("USLT");
                self.tag.add_frame(Lyrics {
                    lang: "eng".to_string(),
                    description: String::new(),
                    text: value.into(),
                });
            }
            "TXXX" | "WXXX" => return Err(Error::NotTextual(info.id)),
            id if id.starts_with('T') => {
                self.tag.set_text(id, value.into());
            }
            id if id.starts_with('W') => {
                self.tag.remove(id);
                self.tag
                    .add_frame(Frame::with_content(id, Content::Link(value.into())));
            }
            id => return Err(Error::NotTextual(id)),
        }
        Ok(())
    }

    /// Append a value to the frame addressed by `id_or_name`, keeping any
    /// existing values.
    ///
    /// COMM and USLT accumulate as distinct frames (each gets an unused
    /// description, see [`TagFile::add_comment`]). ID3v2 allows only one
    /// plain text frame per ID, so repeated `add_text` on a T*** frame
    /// accumulates null-separated values inside that frame, the v2.4
    /// multiple-value convention. Link frames hold a single URL per ID, so
    /// there `add_text` degenerates to [`TagFile::set_text`]. TXXX and WXXX
    /// are rejected in favor of the description-keyed accessors.
    pub fn add_text(&mut self, id_or_name: &str, value: impl Into<String>) -> Result<()> {
        let info = resolve(id_or_name)?;
        match info.id {
            "COMM" => self.add_comment(value),
            "USLT" => {
                let description =
                    unused_description(|d| self.tag.lyrics().any(|l| l.lang == "eng" && l.description == d));
                self.tag.add_frame(Lyrics {
                    lang: "eng".to_string(),
                    description,
                    text: value.into(),
                });
            }
            "TXXX" | "WXXX" => return Err(Error::NotTextual(info.id)),
            id if id.starts_with('T') => {
                let mut text = value.into();
                if let Some(existing) = self.tag.get(id).and_then(frame_text) {
                    text = format!("{existing}\0{text}");
                }
                self.tag.set_text(id, text);
            }
            id if id.starts_with('W') => return self.set_text(id, value),
            id => return Err(Error::NotTextual(id)),
        }
        Ok(())
    }

    /// Remove all frames with the given ID or name, returning how many
    /// were dropped.
    pub fn remove(&mut self, id_or_name: &str) -> Result<usize> {
        let info = resolve(id_or_name)?;
        Ok(self.tag.remove(info.id).len())
    }

    // --- comments -------------------------------------------------------

    /// Text of the first comment frame, if any.
    pub fn comment(&self) -> Option<&str> {
        self.tag.comments().next().map(|c| c.text.as_str())
    }

    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.tag.comments()
    }

    /// Append a comment frame (language "eng").
    ///
    /// The ID3 standard allows only one COMM per (language, description)
    /// pair, so anonymous comments past the first get a numeric description
    /// to keep them distinct instead of silently replacing each other.
    pub fn add_comment(&mut self, text: impl Into<String>) {
        let description =
            unused_description(|d| self.tag.comments().any(|c| c.lang == "eng" && c.description == d));
        self.add_comment_with("eng", description, text);
    }

    /// Append a comment frame with explicit language and description.
    /// An existing comment with the same (language, description) identity
    /// is replaced, per the standard.
    pub fn add_comment_with(
        &mut self,
        lang: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tag.add_frame(Comment {
            lang: lang.into(),
            description: description.into(),
            text: text.into(),
        });
    }

    // --- user text (TXXX) -----------------------------------------------

    /// Value of the user-text frame with the given description.
    pub fn user_text(&self, description: &str) -> Option<&str> {
        self.tag
            .extended_texts()
            .find(|et| et.description == description)
            .map(|et| et.value.as_str())
    }

    /// Set a user-text (TXXX) frame. TXXX identity is its description, so
    /// frames with other descriptions are left alone.
    pub fn set_user_text(&mut self, description: impl Into<String>, value: impl Into<String>) {
        self.tag.add_frame(Frame::with_content(
            "TXXX",
            Content::ExtendedText(ExtendedText {
                description: description.into(),
                value: value.into(),
            }),
        ));
    }

    // --- common text accessors ------------------------------------------

    pub fn title(&self) -> Option<&str> {
        self.tag.title()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.tag.set_title(title);
    }

    pub fn artist(&self) -> Option<&str> {
        self.tag.artist()
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.tag.set_artist(artist);
    }

    pub fn album(&self) -> Option<&str> {
        self.tag.album()
    }

    pub fn set_album(&mut self, album: impl Into<String>) {
        self.tag.set_album(album);
    }

    pub fn genre(&self) -> Option<&str> {
        self.tag.genre()
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.tag.set_genre(genre);
    }

    pub fn year(&self) -> Option<i32> {
        self.tag.year()
    }

    pub fn set_year(&mut self, year: i32) {
        self.tag.set_year(year);
    }

    /// Track number and total parsed from TRCK ("3" or "3/12").
    pub fn track(&self) -> (Option<u32>, Option<u32>) {
        parse_slash_pair_u32(self.tag.get("TRCK").and_then(frame_text))
    }

    /// Write TRCK as "n" or "n/total".
    pub fn set_track(&mut self, n: u32, total: Option<u32>) {
        self.tag.set_text("TRCK", format_slash_pair(n, total));
    }

    // --- write-back -----------------------------------------------------

    /// Write the tag back to the file as ID3v2.4.
    pub fn update(&mut self) -> Result<()> {
        self.update_as(Version::Id3v24)
    }

    /// Write the tag back to the file as the given ID3v2 version.
    /// One blocking write; the container stays usable afterwards.
    pub fn update_as(&mut self, version: Version) -> Result<()> {
        self.tag.write_to_path(&self.path, version)?;
        self.had_tag = true;
        debug!(path = %self.path.display(), ?version, frames = self.len(), "wrote tag");
        Ok(())
    }
}

fn resolve(id_or_name: &str) -> Result<&'static FrameInfo> {
    info::frame_info(id_or_name).ok_or_else(|| Error::UnknownFrame(id_or_name.to_string()))
}

/// First description not yet `taken`: "", then "1", "2", ...
fn unused_description(taken: impl Fn(&str) -> bool) -> String {
    let mut description = String::new();
    let mut n = 0;
    while taken(&description) {
        n += 1;
        description = n.to_string();
    }
    description
}
