//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and draws through the
//! [`PixelMap`](crate::topology::PixelMap) it was built with.

mod chase;
mod comet;
mod pacing;
mod sparkle;
mod sweep;

use embassy_time::{Duration, Instant};

pub use chase::{ChaseEffect, SweepChaseEffect};
pub use comet::{CometEffect, CometPaint};
pub use pacing::Pacing;
pub use sparkle::SparkleEffect;
pub use sweep::SweepEffect;

use crate::color::Rgb;

const EFFECT_NAME_SWEEP: &str = "sweep";
const EFFECT_NAME_SWEEP_CHASE: &str = "sweep_chase";
const EFFECT_NAME_CHASE: &str = "chase";
const EFFECT_NAME_COMET: &str = "comet";
const EFFECT_NAME_SPARKLE: &str = "sparkle";

/// Outcome of a single `step` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The pacing interval has not elapsed, or the effect is frozen
    Idle,
    /// Phase moved by one frame
    Advanced,
    /// Phase moved and reached the natural end of a cycle
    Completed,
}

pub trait Effect<const N: usize> {
    /// Advance the phase by one frame if the pacing interval has elapsed
    fn step(&mut self, now: Instant) -> StepOutcome;

    /// Draw the current phase into the physical frame
    fn render_into(&self, frame: &mut [Rgb; N]);

    /// Restart the phase from the beginning
    fn reset(&mut self);

    /// Start the next cycle after a completion
    ///
    /// Unlike [`Effect::reset`], color drift carried across cycles is kept.
    fn restart(&mut self) {
        self.pacing_mut().reset();
    }

    fn pacing(&self) -> &Pacing;

    fn pacing_mut(&mut self) -> &mut Pacing;
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<'a, const N: usize> {
    /// Hue gradient cycling across the strip
    Sweep(SweepEffect<'a, N>),
    /// Scrolling rainbow segments
    SweepChase(SweepChaseEffect<'a, N>),
    /// Scrolling single color segments
    Chase(ChaseEffect<'a, N>),
    /// Travelling head with a fading tail
    Comet(CometEffect<'a, N>),
    /// Random twinkling pixels
    Sparkle(SparkleEffect<'a, N>),
}

/// Known effect kinds, used for logging and inspection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Sweep,
    SweepChase,
    Chase,
    Comet,
    Sparkle,
}

impl EffectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sweep => EFFECT_NAME_SWEEP,
            Self::SweepChase => EFFECT_NAME_SWEEP_CHASE,
            Self::Chase => EFFECT_NAME_CHASE,
            Self::Comet => EFFECT_NAME_COMET,
            Self::Sparkle => EFFECT_NAME_SPARKLE,
        }
    }
}

impl<const N: usize> EffectSlot<'_, N> {
    /// Advance the effect
    pub fn step(&mut self, now: Instant) -> StepOutcome {
        match self {
            Self::Sweep(effect) => effect.step(now),
            Self::SweepChase(effect) => effect.step(now),
            Self::Chase(effect) => effect.step(now),
            Self::Comet(effect) => effect.step(now),
            Self::Sparkle(effect) => effect.step(now),
        }
    }

    /// Render the effect into the shared frame
    pub fn render_into(&self, frame: &mut [Rgb; N]) {
        match self {
            Self::Sweep(effect) => effect.render_into(frame),
            Self::SweepChase(effect) => effect.render_into(frame),
            Self::Chase(effect) => effect.render_into(frame),
            Self::Comet(effect) => effect.render_into(frame),
            Self::Sparkle(effect) => effect.render_into(frame),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Sweep(effect) => Effect::reset(effect),
            Self::SweepChase(effect) => Effect::reset(effect),
            Self::Chase(effect) => Effect::reset(effect),
            Self::Comet(effect) => Effect::reset(effect),
            Self::Sparkle(effect) => Effect::reset(effect),
        }
    }

    /// Continue with the next cycle after a completion
    pub fn restart(&mut self) {
        match self {
            Self::Sweep(effect) => Effect::restart(effect),
            Self::SweepChase(effect) => Effect::restart(effect),
            Self::Chase(effect) => Effect::restart(effect),
            Self::Comet(effect) => Effect::restart(effect),
            Self::Sparkle(effect) => Effect::restart(effect),
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Sweep(_) => EffectKind::Sweep,
            Self::SweepChase(_) => EffectKind::SweepChase,
            Self::Chase(_) => EffectKind::Chase,
            Self::Comet(_) => EffectKind::Comet,
            Self::Sparkle(_) => EffectKind::Sparkle,
        }
    }

    fn pacing(&self) -> &Pacing {
        match self {
            Self::Sweep(effect) => effect.pacing(),
            Self::SweepChase(effect) => effect.pacing(),
            Self::Chase(effect) => effect.pacing(),
            Self::Comet(effect) => effect.pacing(),
            Self::Sparkle(effect) => effect.pacing(),
        }
    }

    fn pacing_mut(&mut self) -> &mut Pacing {
        match self {
            Self::Sweep(effect) => effect.pacing_mut(),
            Self::SweepChase(effect) => effect.pacing_mut(),
            Self::Chase(effect) => effect.pacing_mut(),
            Self::Comet(effect) => effect.pacing_mut(),
            Self::Sparkle(effect) => effect.pacing_mut(),
        }
    }

    /// Current interval between frames
    pub fn speed(&self) -> Duration {
        self.pacing().interval()
    }

    /// Override the interval between frames
    pub fn set_speed(&mut self, interval: Duration) {
        self.pacing_mut().set_interval(interval);
    }

    /// Recompute the speed from the global tempo and this effect's multiplier
    pub fn apply_tempo(&mut self, tempo: f32) {
        self.pacing_mut().apply_tempo(tempo);
    }

    /// Stop advancing until the next reset
    pub fn halt(&mut self) {
        self.pacing_mut().halt();
    }
}

impl<'a, const N: usize> From<SweepEffect<'a, N>> for EffectSlot<'a, N> {
    fn from(effect: SweepEffect<'a, N>) -> Self {
        Self::Sweep(effect)
    }
}

impl<'a, const N: usize> From<SweepChaseEffect<'a, N>> for EffectSlot<'a, N> {
    fn from(effect: SweepChaseEffect<'a, N>) -> Self {
        Self::SweepChase(effect)
    }
}

impl<'a, const N: usize> From<ChaseEffect<'a, N>> for EffectSlot<'a, N> {
    fn from(effect: ChaseEffect<'a, N>) -> Self {
        Self::Chase(effect)
    }
}

impl<'a, const N: usize> From<CometEffect<'a, N>> for EffectSlot<'a, N> {
    fn from(effect: CometEffect<'a, N>) -> Self {
        Self::Comet(effect)
    }
}

impl<'a, const N: usize> From<SparkleEffect<'a, N>> for EffectSlot<'a, N> {
    fn from(effect: SparkleEffect<'a, N>) -> Self {
        Self::Sparkle(effect)
    }
}
