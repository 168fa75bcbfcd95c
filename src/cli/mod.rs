//! CLI argument parsing types.
//!
//! This module provides the command-line structure for the `presskit` and
//! `image-crop` binaries, plus the shared logging setup.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::convert::DEFAULT_QUALITY;
use crate::PostStatus;

/// WordPress publishing command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "presskit",
    about = "Manage WordPress posts, media, and metadata",
    after_help = "Credentials are read from WP_SITE_URL, WP_USERNAME and WP_APP_PASSWORD (a .env file is honoured).",
    version
)]
pub struct Cli {
    /// Print results as JSON instead of a summary.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload media to WordPress.
    Upload {
        /// Path to the image file.
        #[arg(short, long)]
        image: PathBuf,

        /// Title for the media (defaults to one derived from the file name).
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Create a post.
    CreatePost {
        /// Post title.
        #[arg(short, long)]
        title: String,

        /// Post content (or use --file).
        #[arg(short, long)]
        content: Option<String>,

        /// Read the content from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Post status.
        #[arg(short, long, value_enum, default_value_t = PostStatus::Draft)]
        status: PostStatus,

        /// Featured image media ID.
        #[arg(short = 'm', long)]
        featured_media: Option<u64>,

        /// Directory to save a meta.json file into.
        #[arg(long)]
        save_meta: Option<PathBuf>,
    },

    /// Set the featured image of an existing post.
    SetFeatured {
        /// Post ID.
        #[arg(short, long)]
        post_id: u64,

        /// Media ID.
        #[arg(short, long)]
        media_id: u64,
    },

    /// Fetch metadata for an existing post into meta.json.
    FetchMeta {
        /// Post ID.
        #[arg(short, long)]
        post_id: u64,

        /// Output directory for meta.json.
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Image crop-and-convert command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "image-crop",
    about = "Crop images to an aspect ratio and convert format",
    version
)]
pub struct CropArgs {
    /// Input image file.
    pub input: PathBuf,

    /// Output file (default: <input>-WxH.jpg).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Aspect ratio as W:H.
    #[arg(short, long, default_value = "16:9")]
    pub aspect: String,

    /// Encoder quality for JPEG output (clamped to 1-100).
    #[arg(short, long, default_value_t = i64::from(DEFAULT_QUALITY), allow_negative_numbers = true)]
    pub quality: i64,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CropArgs {
    /// `--quality` clamped to the range the JPEG encoder accepts.
    pub fn jpeg_quality(&self) -> u8 {
        // Clamped above, so the narrowing cast is lossless
        self.quality.clamp(1, 100) as u8
    }
}

/// Install a stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
