//! Comet effect
//!
//! A bright head followed by a tail fading to black. The comet fully enters
//! and fully leaves the strip, and each frame blanks the pixel it just left,
//! so pixels outside the comet keep whatever other effects drew there.

use embassy_time::{Duration, Instant};

use super::{Effect, Pacing, StepOutcome};
use crate::{
    color::{BLACK, Rgb, colorwheel, scale_color},
    config::DEFAULT_TEMPO,
    math8::fraction8,
    topology::PixelMap,
};

const DEFAULT_TAIL_LENGTH: usize = 10;

/// How the comet body is colored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CometPaint {
    /// One color faded along the tail
    Solid(Rgb),
    /// Color wheel spread along the tail, rotating by `step` every frame
    Wheel { offset: u8, step: u8 },
}

/// Comet with a fading tail
#[derive(Debug, Clone)]
pub struct CometEffect<'a, const N: usize> {
    map: &'a PixelMap<N>,
    pacing: Pacing,
    paint: CometPaint,
    tail_length: usize,
    bounce: bool,
    /// Logical index of the blanking pixel behind the tail, may be off-strip
    position: isize,
    /// Travelling toward logical pixel 0
    reverse: bool,
    hue: u8,
}

impl<'a, const N: usize> CometEffect<'a, N> {
    pub fn new(map: &'a PixelMap<N>, paint: CometPaint) -> Self {
        let mut comet = Self {
            map,
            pacing: Pacing::default(),
            paint,
            tail_length: 0,
            bounce: false,
            position: 0,
            reverse: false,
            hue: 0,
        };
        comet.set_tail_length(DEFAULT_TAIL_LENGTH);
        comet
    }

    /// Set the tail length, clamped to `1..=N`
    #[must_use]
    pub fn with_tail_length(mut self, tail_length: usize) -> Self {
        self.set_tail_length(tail_length);
        self
    }

    /// Reverse at each end instead of wrapping around
    #[must_use]
    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
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

    pub const fn tail_length(&self) -> usize {
        self.tail_length
    }

    /// Logical index of the head, if it is on the strip
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn head(&self) -> Option<usize> {
        let head = if self.reverse {
            self.position
        } else {
            self.position + self.tail_length as isize
        };
        (0..N as isize).contains(&head).then_some(head as usize)
    }

    fn set_tail_length(&mut self, tail_length: usize) {
        self.tail_length = tail_length.clamp(1, N.max(1));
        self.rewind();
    }

    #[allow(clippy::cast_possible_wrap)]
    fn rewind(&mut self) {
        self.position = -(self.tail_length as isize);
        self.reverse = false;
    }

    /// Color of the tail pixel `along` steps from the blanking pixel
    fn tail_color(&self, along: usize) -> Rgb {
        let fade = fraction8(along, self.tail_length);
        let base = match self.paint {
            CometPaint::Solid(color) => color,
            CometPaint::Wheel { offset, .. } => {
                colorwheel(offset.wrapping_add(self.hue).wrapping_add(fade))
            }
        };
        scale_color(base, fade)
    }
}

impl<const N: usize> Effect<N> for CometEffect<'_, N> {
    #[allow(clippy::cast_possible_wrap)]
    fn step(&mut self, now: Instant) -> StepOutcome {
        if !self.pacing.due(now) {
            return StepOutcome::Idle;
        }
        if let CometPaint::Wheel { step, .. } = self.paint {
            self.hue = self.hue.wrapping_add(step);
        }

        let last = N as isize - 1;
        let first = -(self.tail_length as isize);
        if self.reverse {
            if self.position > first {
                self.position -= 1;
                return StepOutcome::Advanced;
            }
            self.reverse = false;
            StepOutcome::Completed
        } else {
            if self.position < last {
                self.position += 1;
                return StepOutcome::Advanced;
            }
            if self.bounce {
                self.reverse = true;
                StepOutcome::Advanced
            } else {
                self.position = first;
                StepOutcome::Completed
            }
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn render_into(&self, frame: &mut [Rgb; N]) {
        for k in 0..=self.tail_length {
            let index = self.position + k as isize;
            if !(0..N as isize).contains(&index) {
                continue;
            }
            let along = if self.reverse {
                self.tail_length - k
            } else {
                k
            };
            let color = if along == 0 {
                BLACK
            } else {
                self.tail_color(along)
            };
            self.map.paint(frame, index as usize, color);
        }
    }

    fn reset(&mut self) {
        self.restart();
        self.hue = 0;
    }

    fn restart(&mut self) {
        self.rewind();
        self.pacing.reset();
    }

    fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    fn pacing_mut(&mut self) -> &mut Pacing {
        &mut self.pacing
    }
}
