//! # smally-tools
//!
//! Adapters for the external programs smally delegates to.
//!
//! This crate provides functionality for:
//! - Locating tools on PATH or at configured locations
//! - Running a tool synchronously and capturing its exit code and output
//! - Probing pictures with ImageMagick's `identify`
//! - Losslessly optimising JPEGs in place with `jpegtran`
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use smally_tools::{Prober, TranscodeOptions, Transcoder};
//! use std::path::Path;
//!
//! let prober = Prober::locate(None)?;
//! let info = prober.probe(Path::new("/photos/IMG_0001.jpg"))?;
//! println!("{}", info.summary());
//!
//! let transcoder = Transcoder::locate(None, TranscodeOptions::default())?.with_verifier(prober);
//! let outcome = transcoder.transcode(Path::new("/photos/IMG_0001.jpg"), None)?;
//! println!("{:?}", outcome);
//! # Ok::<(), smally_tools::Error>(())
//! ```

pub mod command;
mod error;
pub mod jpegtran;
pub mod probe;
pub mod tools;
pub mod workspace;

// Re-exports
pub use command::ToolOutput;
pub use error::{Error, Result};
pub use jpegtran::{CopyMode, TranscodeOptions, Transcoded, Transcoder};
pub use probe::{ImageInfo, Prober};
pub use tools::{get_tool_path, require_tool, IDENTIFY, JPEGTRAN};
pub use workspace::{Workspace, WORKSPACE_PREFIX};
