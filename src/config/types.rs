use serde::{Deserialize, Serialize};
use smally_tools::{CopyMode, TranscodeOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub jpegtran: JpegtranConfig,
}

/// Explicit tool locations. Unset means "look it up on PATH".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub identify: Option<PathBuf>,

    #[serde(default)]
    pub jpegtran: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JpegtranConfig {
    /// Markers kept by `jpegtran -copy`
    #[serde(default)]
    pub copy: CopyMode,

    /// Also try a progressive encoding and keep the smaller one
    #[serde(default = "default_true")]
    pub progressive: bool,

    /// Probe the rewritten file and require unchanged dimensions
    #[serde(default = "default_true")]
    pub verify: bool,
}

impl Default for JpegtranConfig {
    fn default() -> Self {
        Self {
            copy: CopyMode::default(),
            progressive: true,
            verify: true,
        }
    }
}

impl JpegtranConfig {
    pub fn transcode_options(&self) -> TranscodeOptions {
        TranscodeOptions {
            copy: self.copy,
            progressive: self.progressive,
        }
    }
}

fn default_true() -> bool {
    true
}
