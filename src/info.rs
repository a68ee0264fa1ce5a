//! Reference tables for ID3 frames, their fields, and the ID3v1 genre list.
//!
//! Frames can be addressed either by their four-character ID from the ID3
//! standard (`"TIT2"`) or by a friendly name (`"title"`). [`frame_info`]
//! accepts both. The per-frame field lists describe what a frame of that
//! kind carries on the wire; the actual encoding is the `id3` crate's job.

/// A field identifier within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Text encoding marker (latin-1 / UTF-16 / UTF-8).
    TextEnc,
    Text,
    Url,
    Data,
    Description,
    Owner,
    Email,
    Rating,
    Filename,
    Language,
    PictureType,
    MimeType,
    Counter,
    Identifier,
    TimestampFormat,
    ContentType,
}

/// Static description of one frame kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Frame ID as specified by the ID3 standard, e.g. `TIT2`.
    pub id: &'static str,
    /// Human-readable description from the standard.
    pub description: &'static str,
    /// Fields a frame of this kind carries.
    pub fields: &'static [Field],
}

const TEXT: &[Field] = &[Field::TextEnc, Field::Text];
const URL: &[Field] = &[Field::Url];
const DATA: &[Field] = &[Field::Data];

/// All frame kinds known to this library, ordered by frame ID.
pub const FRAMES: &[FrameInfo] = &[
    f("AENC", "Audio encryption", &[Field::Owner, Field::Data]),
    f(
        "APIC",
        "Attached picture",
        &[
            Field::TextEnc,
            Field::MimeType,
            Field::PictureType,
            Field::Description,
            Field::Data,
        ],
    ),
    f(
        "COMM",
        "Comments",
        &[Field::TextEnc, Field::Language, Field::Description, Field::Text],
    ),
    f("ENCR", "Encryption method registration", &[Field::Owner, Field::Identifier, Field::Data]),
    f("ETCO", "Event timing codes", DATA),
    f(
        "GEOB",
        "General encapsulated object",
        &[Field::TextEnc, Field::MimeType, Field::Filename, Field::Description, Field::Data],
    ),
    f("GRID", "Group identification registration", &[Field::Owner, Field::Identifier, Field::Data]),
    f("IPLS", "Involved people list", TEXT),
    f("LINK", "Linked information", &[Field::Identifier, Field::Url, Field::Text]),
    f("MCDI", "Music CD identifier", DATA),
    f("MLLT", "MPEG location lookup table", DATA),
    f("OWNE", "Ownership frame", DATA),
    f("PCNT", "Play counter", &[Field::Counter]),
    f("POPM", "Popularimeter", &[Field::Email, Field::Rating, Field::Counter]),
    f("POSS", "Position synchronisation frame", DATA),
    f("PRIV", "Private frame", &[Field::Owner, Field::Data]),
    f("RBUF", "Recommended buffer size", DATA),
    f("RVAD", "Relative volume adjustment", DATA),
    f("RVRB", "Reverb", DATA),
    f(
        "SYLT",
        "Synchronized lyric/text",
        &[
            Field::TextEnc,
            Field::Language,
            Field::TimestampFormat,
            Field::ContentType,
            Field::Description,
            Field::Data,
        ],
    ),
    f("SYTC", "Synchronized tempo codes", DATA),
    f("TALB", "Album/Movie/Show title", TEXT),
    f("TBPM", "BPM (beats per minute)", TEXT),
    f("TCOM", "Composer", TEXT),
    f("TCON", "Content type", TEXT),
    f("TCOP", "Copyright message", TEXT),
    f("TDAT", "Date", TEXT),
    f("TDLY", "Playlist delay", TEXT),
    f("TDRC", "Recording time", TEXT),
    f("TENC", "Encoded by", TEXT),
    f("TEXT", "Lyricist/Text writer", TEXT),
    f("TFLT", "File type", TEXT),
    f("TIME", "Time", TEXT),
    f("TIT1", "Content group description", TEXT),
    f("TIT2", "Title/songname/content description", TEXT),
    f("TIT3", "Subtitle/Description refinement", TEXT),
    f("TKEY", "Initial key", TEXT),
    f("TLAN", "Language(s)", TEXT),
    f("TLEN", "Length", TEXT),
    f("TMED", "Media type", TEXT),
    f("TOAL", "Original album/movie/show title", TEXT),
    f("TOFN", "Original filename", TEXT),
    f("TOLY", "Original lyricist(s)/text writer(s)", TEXT),
    f("TOPE", "Original artist(s)/performer(s)", TEXT),
    f("TORY", "Original release year", TEXT),
    f("TOWN", "File owner/licensee", TEXT),
    f("TPE1", "Lead performer(s)/Soloist(s)", TEXT),
    f("TPE2", "Band/orchestra/accompaniment", TEXT),
    f("TPE3", "Conductor/performer refinement", TEXT),
    f("TPE4", "Interpreted, remixed, or otherwise modified by", TEXT),
    f("TPOS", "Part of a set", TEXT),
    f("TPUB", "Publisher", TEXT),
    f("TRCK", "Track number/Position in set", TEXT),
    f("TRDA", "Recording dates", TEXT),
    f("TRSN", "Internet radio station name", TEXT),
    f("TRSO", "Internet radio station owner", TEXT),
    f("TSIZ", "Size", TEXT),
    f("TSRC", "ISRC (international standard recording code)", TEXT),
    f("TSSE", "Software/Hardware and settings used for encoding", TEXT),
    f(
        "TXXX",
        "User defined text information",
        &[Field::TextEnc, Field::Description, Field::Text],
    ),
    f("TYER", "Year", TEXT),
    f("UFID", "Unique file identifier", &[Field::Owner, Field::Data]),
    f("USER", "Terms of use", &[Field::TextEnc, Field::Language, Field::Text]),
    f(
        "USLT",
        "Unsynchronized lyric/text transcription",
        &[Field::TextEnc, Field::Language, Field::Description, Field::Text],
    ),
    f("WCOM", "Commercial information", URL),
    f("WCOP", "Copyright/Legal information", URL),
    f("WOAF", "Official audio file webpage", URL),
    f("WOAR", "Official artist/performer webpage", URL),
    f("WOAS", "Official audio source webpage", URL),
    f("WORS", "Official internet radio station homepage", URL),
    f("WPAY", "Payment", URL),
    f("WPUB", "Official publisher webpage", URL),
    f(
        "WXXX",
        "User defined URL link",
        &[Field::TextEnc, Field::Description, Field::Url],
    ),
];

const fn f(id: &'static str, description: &'static str, fields: &'static [Field]) -> FrameInfo {
    FrameInfo {
        id,
        description,
        fields,
    }
}

/// The canonical ID3v1 genre list, including the Winamp extensions.
/// The index of a name is its genre number, e.g. `GENRES[13] == "Pop"`.
pub const GENRES: &[&str] = &[
    "Blues", "Classic Rock", "Country", "Dance",
    "Disco", "Funk", "Grunge", "Hip-Hop",
    "Jazz", "Metal", "New Age", "Oldies",
    "Other", "Pop", "R&B", "Rap",
    "Reggae", "Rock", "Techno", "Industrial",
    "Alternative", "Ska", "Death Metal", "Pranks",
    "Soundtrack", "Euro-Techno", "Ambient", "Trip-Hop",
    "Vocal", "Jazz+Funk", "Fusion", "Trance",
    "Classical", "Instrumental", "Acid", "House",
    "Game", "Sound Clip", "Gospel", "Noise",
    "AlternRock", "Bass", "Soul", "Punk",
    "Space", "Meditative", "Instrumental Pop", "Instrumental Rock",
    "Ethnic", "Gothic", "Darkwave", "Techno-Industrial",
    "Electronic", "Pop-Folk", "Eurodance", "Dream",
    "Southern Rock", "Comedy", "Cult", "Gangsta",
    "Top 40", "Christian Rap", "Pop/Funk", "Jungle",
    "Native American", "Cabaret", "New Wave", "Psychadelic",
    "Rave", "Showtunes", "Trailer", "Lo-Fi",
    "Tribal", "Acid Punk", "Acid Jazz", "Polka",
    "Retro", "Musical", "Rock & Roll", "Hard Rock",
    // Winamp extensions
    "Folk", "Folk-Rock", "National Folk", "Swing",
    "Fast Fusion", "Bebob", "Latin", "Revival",
    "Celtic", "Bluegrass", "Avantgarde", "Gothic Rock",
    "Progressive Rock", "Psychedelic Rock", "Symphonic Rock", "Slow Rock",
    "Big Band", "Chorus", "Easy Listening", "Acoustic",
    "Humour", "Speech", "Chanson", "Opera",
    "Chamber Music", "Sonata", "Symphony", "Booty Bass",
    "Primus", "Porn Groove", "Satire", "Slow Jam",
    "Club", "Tango", "Samba", "Folklore",
    "Ballad", "Power Ballad", "Rhythmic Soul", "Freestyle",
    "Duet", "Punk Rock", "Drum Solo", "A capella",
    "Euro-House", "Dance Hall", "Goa", "Drum & Bass",
    "Club-House", "Hardcore", "Terror", "Indie",
    "Britpop", "Negerpunk", "Polsk Punk", "Beat",
    "Christian Gangsta Rap", "Heavy Metal", "Black Metal", "Crossover",
    "Contemporary Christian", "Christian Rock", "Merengue", "Salsa",
    "Trash Metal", "Anime", "JPop", "Synthpop",
];

/// Look up frame information by ID (`"TIT2"`) or friendly name (`"title"`).
pub fn frame_info(id_or_name: &str) -> Option<&'static FrameInfo> {
    let id = id_for_name(id_or_name).unwrap_or(id_or_name);
    FRAMES.iter().find(|info| info.id == id)
}

/// The genre number for a canonical genre name, if any.
///
/// ```
/// assert_eq!(id3tag::genre_index("Pop"), Some(13));
/// ```
pub fn genre_index(name: &str) -> Option<usize> {
    GENRES.iter().position(|g| *g == name)
}

/// Map a friendly accessor name to its frame ID.
///
/// Names mirror the common tagging vocabulary: `title`, `artist`,
/// `album`, `track`, `year`, `comment`, `genre` and friends.
fn id_for_name(name: &str) -> Option<&'static str> {
    let id = match name {
        "title" => "TIT2",
        "artist" | "performer" => "TPE1",
        "album" => "TALB",
        "genre" | "content_type" => "TCON",
        "year" => "TYER",
        "track" => "TRCK",
        "disc" | "part_of_set" => "TPOS",
        "comment" => "COMM",
        "composer" => "TCOM",
        "grouping" => "TIT1",
        "bpm" => "TBPM",
        "subtitle" => "TIT3",
        "date" => "TDAT",
        "time" => "TIME",
        "language" => "TLAN",
        "lyrics" => "USLT",
        "lyricist" => "TEXT",
        "band" | "album_artist" => "TPE2",
        "conductor" => "TPE3",
        "remixer" | "interpreted_by" => "TPE4",
        "publisher" => "TPUB",
        "encoded_by" => "TENC",
        "user_text" => "TXXX",
        "picture" => "APIC",
        "play_counter" => "PCNT",
        "popularimeter" => "POPM",
        _ => return None,
    };
    Some(id)
}
