//! Per-run accumulator.

use crate::actions::Outcome;
use crate::config::ActionKind;
use smally_common::format_size;
use std::path::{Path, PathBuf};

/// A file the action could not handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
    pub exit_code: Option<i32>,
}

/// Counters and totals for one run, updated in place as files go by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files the action handled successfully.
    pub processed: usize,
    /// Files left out by the time window or not applicable to the action.
    pub skipped: usize,
    pub failed: usize,
    /// Transcoded files that could not be made smaller.
    pub unchanged: usize,
    /// Sum of on-disk sizes of processed files, before any rewrite.
    pub total_bytes: u64,
    pub saved_bytes: u64,
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Shown { size, .. } | Outcome::Counted { size } => {
                self.processed += 1;
                self.total_bytes += size;
            }
            Outcome::Replaced {
                original_size,
                new_size,
            } => {
                self.processed += 1;
                self.total_bytes += original_size;
                self.saved_bytes += original_size.saturating_sub(*new_size);
            }
            Outcome::Unchanged { size } => {
                self.processed += 1;
                self.unchanged += 1;
                self.total_bytes += size;
            }
            Outcome::Skipped { .. } => self.skipped += 1,
        }
    }

    pub fn record_failure(&mut self, path: &Path, err: &smally_tools::Error) {
        self.failed += 1;
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
            exit_code: err.exit_code(),
        });
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Closing report line(s) for `action`. Show prints none.
    pub fn footer(&self, action: ActionKind) -> Option<String> {
        match action {
            ActionKind::Show => None,
            ActionKind::Size => Some(format!(
                "Total size: {} bytes ({}) in {} files",
                self.total_bytes,
                format_size(self.total_bytes),
                self.processed
            )),
            ActionKind::Jpegtran => Some(format!(
                "Processed {} files ({} unchanged), {} failed, {} skipped; saved {} bytes ({})",
                self.processed,
                self.unchanged,
                self.failed,
                self.skipped,
                self.saved_bytes,
                format_size(self.saved_bytes)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_accumulates() {
        let mut summary = RunSummary::new();
        summary.record(&Outcome::Counted { size: 50_000 });
        summary.record(&Outcome::Counted { size: 50_000 });
        summary.record(&Outcome::Skipped { reason: "too old" });

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total_bytes, 100_000);
        assert_eq!(
            summary.footer(ActionKind::Size).unwrap(),
            "Total size: 100000 bytes (97.66 KB) in 2 files"
        );
    }

    #[test]
    fn test_saved_bytes_never_negative() {
        let mut summary = RunSummary::new();
        summary.record(&Outcome::Replaced {
            original_size: 1000,
            new_size: 800,
        });
        summary.record(&Outcome::Replaced {
            original_size: 100,
            new_size: 150,
        });
        summary.record(&Outcome::Unchanged { size: 500 });

        assert_eq!(summary.saved_bytes, 200);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.processed, 3);
    }

    #[test]
    fn test_failures_are_kept() {
        let mut summary = RunSummary::new();
        let err = smally_tools::Error::tool_failed("jpegtran", Some(2), "Not a JPEG file");
        summary.record_failure(Path::new("/p/bad.jpg"), &err);

        assert!(summary.has_failures());
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures[0].exit_code, Some(2));
        assert_eq!(summary.failures[0].path, PathBuf::from("/p/bad.jpg"));
        assert!(summary
            .footer(ActionKind::Jpegtran)
            .unwrap()
            .contains("1 failed"));
    }

    #[test]
    fn test_show_has_no_footer() {
        assert!(RunSummary::new().footer(ActionKind::Show).is_none());
    }
}
