//! Rainbow sweep
//!
//! Spreads the full color wheel over the strip and rotates it.

use embassy_time::{Duration, Instant};

use super::{Effect, Pacing, StepOutcome};
use crate::{
    color::{Rgb, colorwheel},
    config::DEFAULT_TEMPO,
    topology::PixelMap,
};

const DEFAULT_HUE_STEP: u8 = 8;

/// Color wheel gradient cycling along the strip
#[derive(Debug, Clone)]
pub struct SweepEffect<'a, const N: usize> {
    map: &'a PixelMap<N>,
    pacing: Pacing,
    /// Hue of logical pixel 0
    phase: u8,
    /// Hue advance per frame
    hue_step: u8,
}

impl<'a, const N: usize> SweepEffect<'a, N> {
    pub fn new(map: &'a PixelMap<N>) -> Self {
        Self {
            map,
            pacing: Pacing::default(),
            phase: 0,
            hue_step: DEFAULT_HUE_STEP,
        }
    }

    /// Set the hue advance per frame
    #[must_use]
    pub fn with_hue_step(mut self, hue_step: u8) -> Self {
        self.hue_step = hue_step;
        self
    }

    /// Set the tempo multiplier
    #[must_use]
    pub fn with_tempo_factor(mut self, tempo_factor: f32) -> Self {
        self.pacing.set_tempo_factor(tempo_factor, DEFAULT_TEMPO);
        self
    }

    /// Set a fixed interval between frames
    #[must_use]
    pub fn with_speed(mut self, interval: Duration) -> Self {
        self.pacing.set_interval(interval);
        self
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }
}

impl<const N: usize> Effect<N> for SweepEffect<'_, N> {
    fn step(&mut self, now: Instant) -> StepOutcome {
        if !self.pacing.due(now) {
            return StepOutcome::Idle;
        }
        let (phase, wrapped) = self.phase.overflowing_add(self.hue_step);
        self.phase = phase;
        if wrapped {
            StepOutcome::Completed
        } else {
            StepOutcome::Advanced
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_into(&self, frame: &mut [Rgb; N]) {
        for i in 0..N {
            let offset = ((i * 256) / N) as u8;
            self.map
                .paint(frame, i, colorwheel(self.phase.wrapping_add(offset)));
        }
    }

    fn reset(&mut self) {
        self.phase = 0;
        self.pacing.reset();
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    fn pacing_mut(&mut self) -> &mut Pacing {
        &mut self.pacing
    }
}
