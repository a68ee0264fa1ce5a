//! id3tag CLI.
//!
//! Thin front end over the library: link a file, edit frames, write back.
//!
//! ```bash
//! id3tag create song.mp3 --title "Talk" --artist "Coldplay"
//! id3tag create fixture.mp3          # sample frames, see `create --help`
//! id3tag print fixture.mp3
//! id3tag print fixture.mp3 --ids
//! id3tag strip fixture.mp3
//! id3tag info song.mp3
//! ```
//!
//! Usage errors print the usage message and exit with status 1; runtime
//! failures exit 1 with the error chain on stderr.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};

use id3tag::{FrameView, MpegInfo, TagFile, frame_text};

#[derive(Parser)]
#[command(
    name = "id3tag",
    about = "Read and write ID3 tags on MP3 files",
    version
)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attach text frames to a file and write the tag.
    ///
    /// Defaults reproduce the sample tag used by the test suite, so
    /// `id3tag create file.mp3` with no flags yields a fully populated
    /// fixture. Pass flags to override any of it.
    Create {
        /// Target MP3 file (must exist).
        file: PathBuf,

        #[arg(long, default_value = "Dummy Title")]
        title: String,

        #[arg(long, default_value = "Dummy Artist")]
        artist: String,

        #[arg(long, default_value = "Dummy Album")]
        album: String,

        /// Track as "n" or "n/total".
        #[arg(long, default_value = "1/10")]
        track: String,

        #[arg(long, default_value = "2000")]
        year: String,

        /// Comment text; repeat the flag for multiple comments.
        #[arg(long = "comment", default_values = ["Dummy Comment", "Dummy Comment 2"])]
        comments: Vec<String>,

        #[arg(long, default_value = "Pop")]
        genre: String,

        /// User-text (TXXX) frame as DESCRIPTION=VALUE; repeatable.
        #[arg(
            long = "user-text",
            value_name = "DESC=VALUE",
            default_values = ["MusicBrainz Album Id=992dc19a-5631-40f5-b252-fbfedbc328a9"]
        )]
        user_texts: Vec<String>,
    },

    /// Print each frame's text on its own line, in stored order.
    Print {
        /// Target MP3 file.
        file: PathBuf,

        /// Prefix each line with the frame ID ("TIT2: ...").
        #[arg(long)]
        ids: bool,
    },

    /// Remove ID3v1 and ID3v2 tags from a file.
    Strip {
        /// Target MP3 file.
        file: PathBuf,
    },

    /// Show MPEG stream properties and a tag summary.
    Info {
        /// Target MP3 file.
        file: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap's own exit code for usage errors is 2; this tool's
            // contract is 1, with 0 reserved for --help/--version.
            let code = match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Create {
            file,
            title,
            artist,
            album,
            track,
            year,
            comments,
            genre,
            user_texts,
        } => cmd_create(
            &file, &title, &artist, &album, &track, &year, &comments, &genre, &user_texts,
        ),
        Commands::Print { file, ids } => cmd_print(&file, ids),
        Commands::Strip { file } => cmd_strip(&file),
        Commands::Info { file } => cmd_info(&file),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_create(
    file: &PathBuf,
    title: &str,
    artist: &str,
    album: &str,
    track: &str,
    year: &str,
    comments: &[String],
    genre: &str,
    user_texts: &[String],
) -> Result<()> {
    let mut tag = TagFile::open(file).with_context(|| format!("opening {}", file.display()))?;

    tag.set_title(title);
    tag.set_artist(artist);
    tag.set_album(album);
    tag.set_text("track", track)?;
    tag.set_text("year", year)?;
    for comment in comments {
        tag.add_comment(comment.as_str());
    }
    tag.set_genre(genre);
    for pair in user_texts {
        let Some((description, value)) = pair.split_once('=') else {
            bail!("--user-text expects DESC=VALUE, got {pair:?}");
        };
        tag.set_user_text(description, value);
    }

    tag.update()
        .with_context(|| format!("writing tag to {}", file.display()))?;

    Ok(())
}

fn cmd_print(file: &PathBuf, ids: bool) -> Result<()> {
    let tag = TagFile::open(file).with_context(|| format!("opening {}", file.display()))?;

    for frame in tag.frames() {
        if ids {
            println!("{}", FrameView::new(frame));
        } else {
            println!("{}", frame_text(frame).unwrap_or(""));
        }
    }

    Ok(())
}

fn cmd_strip(file: &PathBuf) -> Result<()> {
    let outcome = TagFile::strip(file).with_context(|| format!("stripping {}", file.display()))?;

    if !outcome.any() {
        println!("no tags found");
    }
    if outcome.v1 {
        println!("stripped ID3v1");
    }
    if outcome.v2 {
        println!("stripped ID3v2");
    }

    Ok(())
}

fn cmd_info(file: &PathBuf) -> Result<()> {
    let info = MpegInfo::read(file).with_context(|| format!("probing {}", file.display()))?;
    let tag = TagFile::open(file).with_context(|| format!("opening {}", file.display()))?;

    match info.bitrate {
        Some(b) => println!("bitrate:     {b} bit/s"),
        None => println!("bitrate:     unknown"),
    }
    match info.sample_rate {
        Some(r) => println!("sample rate: {r} Hz"),
        None => println!("sample rate: unknown"),
    }
    match info.channels {
        Some(c) => println!("channels:    {c}"),
        None => println!("channels:    unknown"),
    }
    match info.duration_ms {
        Some(ms) => println!("duration:    {}.{:03} s", ms / 1000, ms % 1000),
        None => println!("duration:    unknown"),
    }

    println!("frames:      {}", tag.len());
    if let Some(title) = tag.title() {
        println!("title:       {title}");
    }
    if let Some(artist) = tag.artist() {
        println!("artist:      {artist}");
    }

    Ok(())
}
