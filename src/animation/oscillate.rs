use std::f64::consts::TAU;

use crate::style::params::{BORDER_LAYERS_RANGE, BorderStyleParams, ELEMENT_SIZE_RANGE};

/// Length of one full size/spacing/layer oscillation.
pub const PERIOD_MS: u64 = 2000;
/// Range swept by the spacing oscillation.
pub const SPACING_SWEEP: (f64, f64) = (10.0, 100.0);

/// Sinusoidal sweep of size, spacing and layer count, anchored at `start_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Oscillation {
    start_ms: u64,
    period_ms: u64,
}

impl Oscillation {
    /// Start a sweep at `start_ms`.
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            start_ms,
            period_ms: PERIOD_MS,
        }
    }

    /// Eased position in `[0, 1]`; 0.5 at the start of each period.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms) % self.period_ms.max(1);
        let phase = elapsed as f64 / self.period_ms.max(1) as f64;
        ((phase * TAU).sin() + 1.0) / 2.0
    }

    /// Overwrite the animated controls of `params` for time `now_ms`.
    ///
    /// Returns whether any oscillation is enabled (and therefore a redraw is due).
    pub fn apply(&self, params: &mut BorderStyleParams, now_ms: u64) -> bool {
        let flags = params.animation;
        if !flags.oscillates() {
            return false;
        }
        let s = self.progress(now_ms);
        if flags.size {
            params.element_size = lerp(ELEMENT_SIZE_RANGE, s);
        }
        if flags.spacing {
            params.element_spacing = lerp(SPACING_SWEEP, s);
        }
        if flags.layers {
            let (lo, hi) = BORDER_LAYERS_RANGE;
            params.border_layers = lerp((f64::from(lo), f64::from(hi)), s).round() as u32;
        }
        true
    }
}

fn lerp((lo, hi): (f64, f64), t: f64) -> f64 {
    lo + (hi - lo) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/oscillate.rs"]
mod tests;
