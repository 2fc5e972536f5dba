//! Smally-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across smally:
//!
//! - **Image formats**: The picture types smally knows how to select
//! - **Extension sets**: Validated, immutable sets of selected formats
//! - **Size formatting**: Human-readable byte counts for reports
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use smally_common::{ExtensionSet, ImageFormat};
//! use std::path::Path;
//!
//! let set = ExtensionSet::new([ImageFormat::Jpeg, ImageFormat::Png]).unwrap();
//! assert!(set.contains_path(Path::new("photo.JPEG")));
//! assert!(!set.contains_path(Path::new("anim.gif")));
//! ```

pub mod error;
pub mod format;
pub mod paths;

pub use error::{Error, Result};
pub use format::format_size;
pub use paths::{ExtensionSet, ImageFormat};
