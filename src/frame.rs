//! Read-side views over [`id3::frame::Frame`].
//!
//! The `id3` crate models frame payloads as a [`Content`] enum. For listing
//! and printing we only care about "the text of this frame", whatever kind
//! it is: the text field of T*** frames, the comment or lyrics text, the
//! TXXX value, or the URL of link frames.

use std::fmt;

use id3::frame::{Content, Frame};

use crate::info;

/// Best-effort text of a frame, or `None` for frames without a text-like
/// field (pictures, binary payloads, ...).
pub fn frame_text(frame: &Frame) -> Option<&str> {
    match frame.content() {
        Content::Text(s) => Some(s),
        Content::ExtendedText(et) => Some(&et.value),
        Content::Comment(c) => Some(&c.text),
        Content::Lyrics(l) => Some(&l.text),
        Content::Link(url) => Some(url),
        Content::ExtendedLink(el) => Some(&el.link),
        _ => None,
    }
}

/// A borrowed (id, description, text) view of a frame, for display.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub id: &'a str,
    /// Standard description of the frame kind, when the ID is known.
    pub description: Option<&'static str>,
    pub text: Option<&'a str>,
}

impl<'a> FrameView<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self {
            id: frame.id(),
            description: info::frame_info(frame.id()).map(|i| i.description),
            text: frame_text(frame),
        }
    }
}

impl fmt::Display for FrameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.text.unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::frame::{Comment, ExtendedText};

    #[test]
    fn text_of_text_frame() {
        let frame = Frame::with_content("TIT2", Content::Text("Shy Boy".into()));
        assert_eq!(frame_text(&frame), Some("Shy Boy"));
    }

    #[test]
    fn text_of_comment_and_user_text() {
        let comm = Frame::with_content(
            "COMM",
            Content::Comment(Comment {
                lang: "eng".into(),
                description: String::new(),
                text: "a comment".into(),
            }),
        );
        assert_eq!(frame_text(&comm), Some("a comment"));

        let txxx = Frame::with_content(
            "TXXX",
            Content::ExtendedText(ExtendedText {
                description: "MusicBrainz Album Id".into(),
                value: "992dc19a-5631-40f5-b252-fbfedbc328a9".into(),
            }),
        );
        assert_eq!(frame_text(&txxx), Some("992dc19a-5631-40f5-b252-fbfedbc328a9"));
    }

    #[test]
    fn view_renders_id_and_text() {
        let frame = Frame::with_content("TPE1", Content::Text("Katie Melua".into()));
        let view = FrameView::new(&frame);
        assert_eq!(view.to_string(), "TPE1: Katie Melua");
        assert_eq!(view.description, Some("Lead performer(s)/Soloist(s)"));
    }
}
