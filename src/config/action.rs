//! Validated settings for one run.

use crate::error::ConfigError;
use crate::pipeline::TimeWindow;
use smally_common::{ExtensionSet, ImageFormat};
use std::path::PathBuf;
use std::time::Duration;

/// Which per-file operation a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Print path, format, dimensions and size.
    Show,
    /// Sum file sizes.
    Size,
    /// Losslessly recompress JPEGs in place.
    Jpegtran,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Show => "show",
            ActionKind::Size => "size",
            ActionKind::Jpegtran => "jpegtran",
        }
    }
}

/// Raw, unvalidated run settings as collected from the command line.
#[derive(Debug, Clone)]
pub struct ActionOptions {
    pub action: ActionKind,
    pub paths: Vec<PathBuf>,
    pub formats: Vec<ImageFormat>,
    /// Milliseconds between files.
    pub interval_ms: Option<i64>,
    pub recursive: bool,
    /// Seconds.
    pub time_window: Option<f64>,
    pub keep_mtime: bool,
}

/// Immutable, validated settings shared by every stage of a run.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub action: ActionKind,
    /// Absolute root paths, all known to exist.
    pub paths: Vec<PathBuf>,
    pub extensions: ExtensionSet,
    pub interval: Duration,
    pub recursive: bool,
    pub time_window: Option<TimeWindow>,
    /// Only honoured by [`ActionKind::Jpegtran`].
    pub keep_mtime: bool,
}

impl TryFrom<ActionOptions> for ActionConfig {
    type Error = ConfigError;

    /// Checks run in a fixed order and stop at the first problem: paths,
    /// picture types, interval, time window, then the jpegtran/JPG pairing.
    fn try_from(options: ActionOptions) -> Result<Self, Self::Error> {
        let mut paths = Vec::with_capacity(options.paths.len());
        for path in &options.paths {
            if !path.exists() {
                return Err(ConfigError::PathNotFound(path.clone()));
            }
            paths.push(std::path::absolute(path)?);
        }

        let extensions = ExtensionSet::new(options.formats)?;

        let interval = match options.interval_ms {
            None => Duration::ZERO,
            Some(ms) if ms >= 0 => Duration::from_millis(ms as u64),
            Some(ms) => return Err(ConfigError::NegativeInterval(ms)),
        };

        let time_window = options
            .time_window
            .map(|secs| TimeWindow::new(secs).ok_or(ConfigError::NonPositiveTimeWindow(secs)))
            .transpose()?;

        if options.action == ActionKind::Jpegtran && !extensions.is_jpeg_only() {
            return Err(ConfigError::JpegtranRequiresJpg);
        }

        Ok(Self {
            action: options.action,
            paths,
            extensions,
            interval,
            recursive: options.recursive,
            time_window,
            keep_mtime: options.keep_mtime,
        })
    }
}
