//! Picture probing module.
//!
//! Probing is a read-only inspection of a picture through an external tool.
//! Only ImageMagick's `identify` is supported.

mod identify;
mod types;

pub use identify::probe_with_identify;
pub use types::*;

use crate::tools::{get_tool_path, IDENTIFY};
use crate::Result;
use std::path::{Path, PathBuf};

/// Probe bound to a resolved `identify` executable.
#[derive(Debug, Clone)]
pub struct Prober {
    program: PathBuf,
}

impl Prober {
    /// Use the `identify` at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve `identify` from a configured path or PATH.
    pub fn locate(configured: Option<&Path>) -> Result<Self> {
        get_tool_path(IDENTIFY, configured).map(Self::new)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn probe(&self, path: &Path) -> Result<ImageInfo> {
        probe_with_identify(&self.program, path)
    }
}
