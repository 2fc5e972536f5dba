//! Lazy filter → throttle chain in front of the action runner.
//!
//! [`Pipeline`] pulls one candidate at a time from the scanner, drops it if it
//! falls outside the time window, otherwise applies the throttle delay and
//! hands it out. Nothing is read ahead, so each file's delay and action happen
//! before the next file is even looked at.

mod throttle;
mod window;

pub use throttle::Throttle;
pub use window::{include, TimeWindow};

use crate::config::ActionConfig;
use crate::scanner::{self, FileCandidate};
use std::time::SystemTime;
use tracing::debug;

pub struct Pipeline<I> {
    candidates: I,
    window: Option<TimeWindow>,
    now: SystemTime,
    throttle: Throttle,
    skipped: usize,
}

impl<I> Pipeline<I>
where
    I: Iterator<Item = FileCandidate>,
{
    pub fn new(candidates: I, window: Option<TimeWindow>, now: SystemTime, throttle: Throttle) -> Self {
        Self {
            candidates,
            window,
            now,
            throttle,
            skipped: 0,
        }
    }

    /// Number of candidates dropped by the time window so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Build the pipeline for a run, with `now` fixed for the whole run.
pub fn for_config(
    config: &ActionConfig,
    now: SystemTime,
) -> Pipeline<impl Iterator<Item = FileCandidate> + '_> {
    Pipeline::new(
        scanner::scan(&config.paths, config.recursive, &config.extensions),
        config.time_window,
        now,
        Throttle::new(config.interval),
    )
}

impl<I> Iterator for Pipeline<I>
where
    I: Iterator<Item = FileCandidate>,
{
    type Item = FileCandidate;

    fn next(&mut self) -> Option<FileCandidate> {
        for candidate in self.candidates.by_ref() {
            if !include(&candidate, self.window, self.now) {
                debug!("Outside time window: {:?}", candidate.path);
                self.skipped += 1;
                continue;
            }
            self.throttle.pace();
            return Some(candidate);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smally_common::ImageFormat;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    fn candidate(name: &str, age_secs: u64, now: SystemTime) -> FileCandidate {
        FileCandidate {
            path: PathBuf::from(name),
            format: ImageFormat::Jpeg,
            extension: "jpg".to_string(),
            size: 1,
            modified: now - Duration::from_secs(age_secs),
        }
    }

    #[test]
    fn test_window_drops_and_counts() {
        let now = SystemTime::now();
        let items = vec![
            candidate("old.jpg", 7200, now),
            candidate("new.jpg", 1800, now),
            candidate("older.jpg", 9000, now),
        ];
        let mut pipeline = Pipeline::new(
            items.into_iter(),
            TimeWindow::new(3600.0),
            now,
            Throttle::new(Duration::ZERO),
        );

        let kept: Vec<_> = pipeline.by_ref().collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].path, PathBuf::from("new.jpg"));
        assert_eq!(pipeline.skipped(), 2);
    }

    #[test]
    fn test_lazy_lock_step() {
        let now = SystemTime::now();
        let pulled = Rc::new(Cell::new(0));
        let counter = pulled.clone();
        let source = (0..5).map(move |i| {
            counter.set(counter.get() + 1);
            candidate(&format!("{i}.jpg"), 0, now)
        });

        let mut pipeline = Pipeline::new(source, None, now, Throttle::new(Duration::ZERO));
        assert_eq!(pulled.get(), 0);
        pipeline.next();
        assert_eq!(pulled.get(), 1);
        pipeline.next();
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_throttle_only_between_yielded_items() {
        let now = SystemTime::now();
        let items = vec![
            candidate("a.jpg", 0, now),
            candidate("skip1.jpg", 100, now),
            candidate("skip2.jpg", 100, now),
            candidate("b.jpg", 0, now),
        ];
        let pipeline = Pipeline::new(
            items.into_iter(),
            TimeWindow::new(10.0),
            now,
            Throttle::new(Duration::from_millis(100)),
        );

        let start = Instant::now();
        assert_eq!(pipeline.count(), 2);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(280));
    }
}
