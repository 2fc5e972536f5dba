use crate::scanner::FileCandidate;
use std::time::SystemTime;

/// Maximum file age, in seconds, for a file to be processed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow(f64);

impl TimeWindow {
    /// `None` unless `seconds` is finite and strictly positive.
    pub fn new(seconds: f64) -> Option<Self> {
        (seconds.is_finite() && seconds > 0.0).then_some(Self(seconds))
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// True iff `0 <= now - modified <= window`.
    ///
    /// Files modified in the future are never inside the window.
    pub fn includes(&self, modified: SystemTime, now: SystemTime) -> bool {
        match now.duration_since(modified) {
            Ok(age) => age.as_secs_f64() <= self.0,
            Err(_) => false,
        }
    }
}

/// Inclusion decision for one candidate. No window means no age filter.
pub fn include(candidate: &FileCandidate, window: Option<TimeWindow>, now: SystemTime) -> bool {
    window.map_or(true, |w| w.includes(candidate.modified, now))
}
