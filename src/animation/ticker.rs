/// Minimum spacing between scroll animation steps, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Coarse frame throttle: turns a stream of frame timestamps into animation ticks.
///
/// A tick fires on the first poll and then whenever strictly more than `interval_ms` elapsed
/// since the previous tick. Timestamps that go backwards never fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Ticker {
    /// A ticker with the given minimum interval.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Configured interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Report a frame at `now_ms`; returns whether an animation step should run.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let fire = match self.last_ms {
            None => true,
            Some(last) => now_ms.checked_sub(last).is_some_and(|dt| dt > self.interval_ms),
        };
        if fire {
            self.last_ms = Some(now_ms);
        }
        fire
    }

    /// Forget the last tick so the next poll fires immediately.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ticker.rs"]
mod tests;
