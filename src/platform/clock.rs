//! Frame-time to fixed-tick conversion

use crate::consts::{MAX_SUBSTEPS, TICK_MS};

/// Accumulates real frame time and hands out whole simulation ticks.
///
/// Long gaps (a backgrounded tab) are capped at `MAX_SUBSTEPS` ticks so the
/// game never fast-forwards through time nobody saw.
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f64,
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed a frame timestamp (ms). Returns the number of ticks to run.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_time.replace(now_ms) {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.advance(delta)
    }

    /// Feed an elapsed duration (ms). Returns the number of ticks to run.
    pub fn advance(&mut self, delta_ms: f64) -> u32 {
        self.accumulator = (self.accumulator + delta_ms).min(TICK_MS * MAX_SUBSTEPS as f64);
        let mut steps = 0;
        while self.accumulator >= TICK_MS && steps < MAX_SUBSTEPS {
            self.accumulator -= TICK_MS;
            steps += 1;
        }
        steps
    }

    /// Forget the last timestamp (call when resuming from a hidden tab)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0)
    pub fn alpha(&self) -> f64 {
        self.accumulator / TICK_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_nothing() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(12_345.0), 0);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(10.0), 0);
        assert_eq!(clock.advance(10.0), 1);
        assert!(clock.alpha() > 0.0 && clock.alpha() < 1.0);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut clock = FrameClock::new();
        clock.frame(0.0);
        assert_eq!(clock.frame(60_000.0), MAX_SUBSTEPS);
        // The backlog was dropped, not deferred
        assert_eq!(clock.frame(60_001.0), 0);
    }
}
