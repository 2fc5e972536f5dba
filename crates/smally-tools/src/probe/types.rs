//! Types describing a probed picture.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Descriptive metadata reported by the probe for one picture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Path that was probed.
    pub file_path: PathBuf,
    /// Format name as reported by the probe (e.g. "JPEG", "PNG").
    pub format: String,
    /// Width in pixels of the first frame.
    pub width: u32,
    /// Height in pixels of the first frame.
    pub height: u32,
    /// Number of frames; greater than one for animated GIF/WebP.
    pub frames: u32,
}

impl ImageInfo {
    pub fn is_animated(&self) -> bool {
        self.frames > 1
    }

    /// Same picture geometry as `other`.
    pub fn same_dimensions(&self, other: &ImageInfo) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Short one-line description, e.g. `JPEG 1920x1080` or `GIF 64x64 (12 frames)`.
    pub fn summary(&self) -> String {
        if self.is_animated() {
            format!("{} {}x{} ({} frames)", self.format, self.width, self.height, self.frames)
        } else {
            format!("{} {}x{}", self.format, self.width, self.height)
        }
    }
}
