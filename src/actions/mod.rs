//! Per-file actions and the runner that drives them.
//!
//! [`prepare`] is the startup capability check: it resolves the external
//! tools an action needs and fails before any file is touched if one is
//! missing. [`run`] then feeds the [`Pipeline`](crate::pipeline::Pipeline)
//! through the action one file at a time.

mod jpegtran;
mod show;
mod size;

pub use jpegtran::JpegtranAction;
pub use show::ShowAction;
pub use size::SizeAction;

use crate::config::{ActionConfig, ActionKind, Config};
use crate::error::ConfigError;
use crate::pipeline;
use crate::scanner::FileCandidate;
use crate::summary::RunSummary;
use smally_common::format_size;
use smally_tools::{ImageInfo, Prober, Transcoder};
use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Result of handling one file successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Shown { info: ImageInfo, size: u64 },
    Counted { size: u64 },
    Replaced { original_size: u64, new_size: u64 },
    Unchanged { size: u64 },
    Skipped { reason: &'static str },
}

impl Outcome {
    /// Line printed for this file, if the action reports per file.
    pub fn report_line(&self, path: &Path) -> Option<String> {
        match self {
            Outcome::Shown { info, size } => Some(format!(
                "{}  {}  {}",
                path.display(),
                info.summary(),
                format_size(*size)
            )),
            Outcome::Counted { .. } => None,
            Outcome::Replaced {
                original_size,
                new_size,
            } => {
                let saved = original_size.saturating_sub(*new_size);
                let percent = if *original_size == 0 {
                    0.0
                } else {
                    saved as f64 * 100.0 / *original_size as f64
                };
                Some(format!(
                    "{}  {} -> {} bytes, saved {} ({:.1}%)",
                    path.display(),
                    original_size,
                    new_size,
                    saved,
                    percent
                ))
            }
            Outcome::Unchanged { size } => {
                Some(format!("{}  {} bytes, no gain", path.display(), size))
            }
            Outcome::Skipped { reason } => Some(format!("{}  skipped: {}", path.display(), reason)),
        }
    }
}

/// One of the per-file operations.
pub trait FileAction {
    fn kind(&self) -> ActionKind;

    /// Handle one file. Errors are per-file and never abort the run.
    fn process(&self, candidate: &FileCandidate) -> smally_tools::Result<Outcome>;
}

/// Resolve the tools `config.action` needs and build the action.
pub fn prepare(config: &ActionConfig, settings: &Config) -> Result<Box<dyn FileAction>, ConfigError> {
    let action: Box<dyn FileAction> = match config.action {
        ActionKind::Size => Box::new(SizeAction),
        ActionKind::Show => Box::new(ShowAction::new(locate_prober(settings)?)),
        ActionKind::Jpegtran => {
            let mut transcoder = Transcoder::locate(
                settings.tools.jpegtran.as_deref(),
                settings.jpegtran.transcode_options(),
            )
            .map_err(ConfigError::MissingTool)?;
            debug!("Using jpegtran at {:?}", transcoder.program());

            if settings.jpegtran.verify {
                transcoder = transcoder.with_verifier(locate_prober(settings)?);
            }
            Box::new(JpegtranAction::new(transcoder, config.keep_mtime))
        }
    };
    Ok(action)
}

fn locate_prober(settings: &Config) -> Result<Prober, ConfigError> {
    let prober =
        Prober::locate(settings.tools.identify.as_deref()).map_err(ConfigError::MissingTool)?;
    debug!("Using identify at {:?}", prober.program());
    Ok(prober)
}

/// Run `action` over every selected file, writing the report to `out`.
///
/// Per-file failures are reported and counted; only a failure to write the
/// report aborts the run.
pub fn run<W: Write>(
    config: &ActionConfig,
    action: &dyn FileAction,
    now: SystemTime,
    out: &mut W,
) -> io::Result<RunSummary> {
    info!(
        "Running {} over {} path(s) for .{}, recursive: {}",
        action.kind().name(),
        config.paths.len(),
        config.extensions.extensions().join(" ."),
        config.recursive
    );
    if let Some(window) = config.time_window {
        info!("Only files modified within the last {}s", window.seconds());
    }

    let mut summary = RunSummary::new();
    let mut pipeline = pipeline::for_config(config, now);

    for candidate in pipeline.by_ref() {
        match action.process(&candidate) {
            Ok(outcome) => {
                debug!("{:?}: {:?}", candidate.path, outcome);
                if let Some(line) = outcome.report_line(&candidate.path) {
                    writeln!(out, "{}", line)?;
                }
                summary.record(&outcome);
            }
            Err(err) => {
                warn!(
                    "Failed on {:?} (exit code {:?}): {}",
                    candidate.path,
                    err.exit_code(),
                    err
                );
                writeln!(out, "{}  FAILED: {}", candidate.path.display(), err)?;
                summary.record_failure(&candidate.path, &err);
            }
        }
    }
    summary.skipped += pipeline.skipped();

    if let Some(footer) = summary.footer(config.action) {
        writeln!(out, "{}", footer)?;
    }
    out.flush()?;

    info!(
        "Done: {} processed, {} skipped, {} failed",
        summary.processed, summary.skipped, summary.failed
    );
    Ok(summary)
}
