/// Clock advanced by each animation tick.
pub const TIME_PER_TICK: f64 = 0.05;
/// Buffer pixels the motifs travel per animation tick.
pub const OFFSET_PER_TICK: f64 = 3.0;

/// Accumulated scroll animation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Shimmer clock; drives the small rotation oscillation.
    pub animation_time: f64,
    /// Cumulative displacement along each edge, in buffer pixels.
    pub scroll_offset: f64,
}

impl ScrollState {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.animation_time += TIME_PER_TICK;
        self.scroll_offset += OFFSET_PER_TICK;
    }

    /// State after `ticks` ticks from rest.
    pub fn after_ticks(ticks: u64) -> Self {
        let n = ticks as f64;
        Self {
            animation_time: n * TIME_PER_TICK,
            scroll_offset: n * OFFSET_PER_TICK,
        }
    }
}
