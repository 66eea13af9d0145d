//! Chase effects
//!
//! Segments of `size` lit pixels separated by `spacing` dark pixels scroll
//! along the strip one pixel per frame. One full scroll period is the
//! natural end of a cycle.

use embassy_time::{Duration, Instant};

use super::{Effect, Pacing, StepOutcome};
use crate::{
    color::{BLACK, Rgb, colorwheel},
    config::DEFAULT_TEMPO,
    topology::PixelMap,
};

const DEFAULT_HUE_STEP: u8 = 8;

/// Segment layout and scroll position
#[derive(Debug, Clone)]
struct Segments {
    size: usize,
    spacing: usize,
    offset: usize,
}

impl Segments {
    /// Both parameters are clamped to the strip width, and `size` to at least one
    fn new<const N: usize>(size: usize, spacing: usize) -> Self {
        Self {
            size: size.clamp(1, N.max(1)),
            spacing: spacing.min(N),
            offset: 0,
        }
    }

    const fn period(&self) -> usize {
        self.size + self.spacing
    }

    /// Segment number covering logical pixel `i`, if it is lit
    fn segment_at(&self, i: usize) -> Option<usize> {
        let period = self.period();
        let shifted = i + period - self.offset;
        (shifted % period < self.size).then_some(shifted / period)
    }

    /// Scroll by one pixel, returning true when a full period wrapped
    fn advance(&mut self) -> bool {
        self.offset = (self.offset + 1) % self.period();
        self.offset == 0
    }
}

/// Single color chase
#[derive(Debug, Clone)]
pub struct ChaseEffect<'a, const N: usize> {
    map: &'a PixelMap<N>,
    pacing: Pacing,
    color: Rgb,
    segments: Segments,
}

impl<'a, const N: usize> ChaseEffect<'a, N> {
    pub fn new(map: &'a PixelMap<N>, color: Rgb, size: usize, spacing: usize) -> Self {
        Self {
            map,
            pacing: Pacing::default(),
            color,
            segments: Segments::new::<N>(size, spacing),
        }
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

    pub const fn size(&self) -> usize {
        self.segments.size
    }

    pub const fn spacing(&self) -> usize {
        self.segments.spacing
    }
}

impl<const N: usize> Effect<N> for ChaseEffect<'_, N> {
    fn step(&mut self, now: Instant) -> StepOutcome {
        if !self.pacing.due(now) {
            return StepOutcome::Idle;
        }
        if self.segments.advance() {
            StepOutcome::Completed
        } else {
            StepOutcome::Advanced
        }
    }

    fn render_into(&self, frame: &mut [Rgb; N]) {
        for i in 0..N {
            let color = match self.segments.segment_at(i) {
                Some(_) => self.color,
                None => BLACK,
            };
            self.map.paint(frame, i, color);
        }
    }

    fn reset(&mut self) {
        self.segments.offset = 0;
        self.pacing.reset();
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    fn pacing_mut(&mut self) -> &mut Pacing {
        &mut self.pacing
    }
}

/// Chase where every segment takes its own color from the wheel
///
/// The wheel position advances by `hue_step` per segment and again after each
/// full scroll period, so the colors drift as the segments move.
#[derive(Debug, Clone)]
pub struct SweepChaseEffect<'a, const N: usize> {
    map: &'a PixelMap<N>,
    pacing: Pacing,
    segments: Segments,
    hue: u8,
    hue_step: u8,
}

impl<'a, const N: usize> SweepChaseEffect<'a, N> {
    pub fn new(map: &'a PixelMap<N>, size: usize, spacing: usize) -> Self {
        Self {
            map,
            pacing: Pacing::default(),
            segments: Segments::new::<N>(size, spacing),
            hue: 0,
            hue_step: DEFAULT_HUE_STEP,
        }
    }

    /// Set the wheel advance between segments and per period
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

    pub const fn size(&self) -> usize {
        self.segments.size
    }

    pub const fn spacing(&self) -> usize {
        self.segments.spacing
    }
}

impl<const N: usize> Effect<N> for SweepChaseEffect<'_, N> {
    fn step(&mut self, now: Instant) -> StepOutcome {
        if !self.pacing.due(now) {
            return StepOutcome::Idle;
        }
        if self.segments.advance() {
            self.hue = self.hue.wrapping_add(self.hue_step);
            StepOutcome::Completed
        } else {
            StepOutcome::Advanced
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_into(&self, frame: &mut [Rgb; N]) {
        for i in 0..N {
            let color = match self.segments.segment_at(i) {
                Some(segment) => {
                    let hue = self
                        .hue
                        .wrapping_add(self.hue_step.wrapping_mul(segment as u8));
                    colorwheel(hue)
                }
                None => BLACK,
            };
            self.map.paint(frame, i, color);
        }
    }

    fn reset(&mut self) {
        self.restart();
        self.hue = 0;
    }

    fn restart(&mut self) {
        self.segments.offset = 0;
        self.pacing.reset();
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    fn pacing_mut(&mut self) -> &mut Pacing {
        &mut self.pacing
    }
}
