use std::time::Duration;

/// Pacing between processed files.
///
/// [`Throttle::pace`] sleeps for the interval before every item except the
/// first. A zero interval never sleeps.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    primed: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            primed: false,
        }
    }

    /// Call once per item, right before it is processed.
    pub fn pace(&mut self) {
        if self.primed && !self.interval.is_zero() {
            tracing::trace!("Throttling for {:?}", self.interval);
            std::thread::sleep(self.interval);
        }
        self.primed = true;
    }
}
