//! Sparkle effect
//!
//! Lights a handful of random pixels for one frame. The previous frame's
//! sparkles go back to the background color; every other pixel is left as
//! drawn by whatever shares the frame.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use super::{Effect, Pacing, StepOutcome};
use crate::{
    color::{BLACK, Rgb},
    config::DEFAULT_TEMPO,
    topology::PixelMap,
};

/// Upper bound for sparkles per frame
pub const MAX_SPARKLES: usize = 32;

const DEFAULT_SEED: u64 = 0x5EED_5CA7;

/// Random sparkles of a single color
#[derive(Debug, Clone)]
pub struct SparkleEffect<'a, const N: usize> {
    map: &'a PixelMap<N>,
    pacing: Pacing,
    color: Rgb,
    background: Rgb,
    count: usize,
    /// Pixels lit in the current frame
    lit: Vec<usize, MAX_SPARKLES>,
    /// Pixels lit in the previous frame
    faded: Vec<usize, MAX_SPARKLES>,
    seed: u64,
    rng: fastrand::Rng,
}

impl<'a, const N: usize> SparkleEffect<'a, N> {
    /// `count` is clamped to the strip width and to [`MAX_SPARKLES`]
    pub fn new(map: &'a PixelMap<N>, color: Rgb, count: usize) -> Self {
        Self {
            map,
            pacing: Pacing::default(),
            color,
            background: BLACK,
            count: count.min(N).min(MAX_SPARKLES),
            lit: Vec::new(),
            faded: Vec::new(),
            seed: DEFAULT_SEED,
            rng: fastrand::Rng::with_seed(DEFAULT_SEED),
        }
    }

    /// Color restored on pixels after their sparkle
    #[must_use]
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Seed for sparkle placement
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = fastrand::Rng::with_seed(seed);
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

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Pixels lit in the current frame
    pub fn lit(&self) -> &[usize] {
        &self.lit
    }
}

impl<const N: usize> Effect<N> for SparkleEffect<'_, N> {
    fn step(&mut self, now: Instant) -> StepOutcome {
        if !self.pacing.due(now) {
            return StepOutcome::Idle;
        }
        self.faded.clone_from(&self.lit);
        self.lit.clear();
        if N > 0 {
            for _ in 0..self.count {
                // count <= MAX_SPARKLES, so the push cannot fail
                let _ = self.lit.push(self.rng.usize(..N));
            }
        }
        StepOutcome::Advanced
    }

    fn render_into(&self, frame: &mut [Rgb; N]) {
        for &i in &self.faded {
            self.map.paint(frame, i, self.background);
        }
        for &i in &self.lit {
            self.map.paint(frame, i, self.color);
        }
    }

    fn reset(&mut self) {
        self.lit.clear();
        self.faded.clear();
        self.rng = fastrand::Rng::with_seed(self.seed);
        self.pacing.reset();
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    fn pacing_mut(&mut self) -> &mut Pacing {
        &mut self.pacing
    }
}
