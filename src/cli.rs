use clap::{ArgGroup, Parser};
use smally::config::{ActionKind, ActionOptions};
use smally_common::ImageFormat;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  Compress JPGs losslessly, in batch mode:
    smally -p path1 path2 --jpegtran --jpg

  Wait 500 ms between files, recurse into sub-folders, keep mtime:
    smally -p path1 --jpegtran --jpg -i 500 -r -k

  Only touch files modified within the last day:
    smally -p path1 --jpegtran --jpg -t 86400

  Total size of all supported pictures:
    smally -p path --size --jpg --png --gif --webp

  Show format, dimensions and size of JPGs and PNGs:
    smally -p path --show --jpg --png";

#[derive(Parser)]
#[command(name = "smally")]
#[command(
    author,
    version,
    about = "Compress JPGs losslessly in batch mode, and more",
    after_help = EXAMPLES
)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["show", "size", "jpegtran"])
))]
pub struct Cli {
    /// Paths of the picture folders
    #[arg(short, long, required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Interval between files, in milliseconds
    #[arg(short, long, allow_negative_numbers = true)]
    pub interval: Option<i64>,

    /// Recurse into sub-folders
    #[arg(short, long)]
    pub recursive: bool,

    /// Keep the mtime untouched after compressing
    #[arg(short = 'k', long = "keepmtime")]
    pub keep_mtime: bool,

    /// Only act on files whose age (now - mtime) is within this many seconds
    #[arg(short = 't', long = "timewindow", allow_negative_numbers = true)]
    pub time_window: Option<f64>,

    /// Select .jpg and .jpeg files
    #[arg(long)]
    pub jpg: bool,

    /// Select .png files
    #[arg(long)]
    pub png: bool,

    /// Select .gif files
    #[arg(long)]
    pub gif: bool,

    /// Select .webp files
    #[arg(long)]
    pub webp: bool,

    /// Show pathname, format, dimensions and size
    #[arg(long)]
    pub show: bool,

    /// Calculate total size
    #[arg(long)]
    pub size: bool,

    /// Lossless compress JPGs with the jpegtran tool
    #[arg(long)]
    pub jpegtran: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn action(&self) -> ActionKind {
        if self.jpegtran {
            ActionKind::Jpegtran
        } else if self.show {
            ActionKind::Show
        } else {
            ActionKind::Size
        }
    }

    pub fn formats(&self) -> Vec<ImageFormat> {
        [
            (self.jpg, ImageFormat::Jpeg),
            (self.png, ImageFormat::Png),
            (self.gif, ImageFormat::Gif),
            (self.webp, ImageFormat::Webp),
        ]
        .into_iter()
        .filter_map(|(chosen, format)| chosen.then_some(format))
        .collect()
    }

    pub fn action_options(&self) -> ActionOptions {
        ActionOptions {
            action: self.action(),
            paths: self.paths.clone(),
            formats: self.formats(),
            interval_ms: self.interval,
            recursive: self.recursive,
            time_window: self.time_window,
            keep_mtime: self.keep_mtime,
        }
    }
}
