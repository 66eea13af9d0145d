use embassy_time::{Duration, Instant};

use crate::config::DEFAULT_TEMPO;

/// Frame pacing shared by all effects
///
/// `interval` is the time between phase advances, so larger values mean
/// slower motion. An interval of zero freezes the effect on its current
/// frame.
#[derive(Debug, Clone)]
pub struct Pacing {
    interval: Duration,
    /// Multiplier applied to the global tempo to get `interval` in seconds,
    /// `None` for a fixed interval
    tempo_factor: Option<f32>,
    last_advance: Option<Instant>,
    halted: bool,
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_tempo(1.0, DEFAULT_TEMPO)
    }
}

impl Pacing {
    /// Pacing derived from a tempo multiplier and the current tempo
    pub fn from_tempo(tempo_factor: f32, tempo: f32) -> Self {
        Self {
            interval: tempo_interval(tempo_factor, tempo),
            tempo_factor: Some(tempo_factor),
            last_advance: None,
            halted: false,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn tempo_factor(&self) -> Option<f32> {
        self.tempo_factor
    }

    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Switch to a fixed interval
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.tempo_factor = None;
    }

    pub fn set_tempo_factor(&mut self, tempo_factor: f32, tempo: f32) {
        self.tempo_factor = Some(tempo_factor);
        self.apply_tempo(tempo);
    }

    /// Recompute the interval for a new tempo; fixed intervals are kept
    pub fn apply_tempo(&mut self, tempo: f32) {
        if let Some(tempo_factor) = self.tempo_factor {
            self.interval = tempo_interval(tempo_factor, tempo);
        }
    }

    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Resume if halted, keeping the time of the last advance
    pub fn reset(&mut self) {
        self.halted = false;
    }

    /// Check whether a new frame is due and consume it
    ///
    /// The very first call is always due. The next deadline is measured
    /// from `now`, so a stalled loop does not produce a burst of catch-up
    /// frames.
    pub fn due(&mut self, now: Instant) -> bool {
        if self.halted || self.interval.as_ticks() == 0 {
            return false;
        }
        match self.last_advance {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_advance = Some(now);
                true
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tempo_interval(tempo_factor: f32, tempo: f32) -> Duration {
    let micros = libm::roundf(tempo_factor * tempo * 1_000_000.0);
    if micros.is_nan() || micros <= 0.0 {
        return Duration::from_ticks(0);
    }
    Duration::from_micros(micros as u64)
}
