//! Timed overlays that bypass the playlist
//!
//! [`FlashAnimation`] is the strobe alert played in flash mode, and
//! [`StartupAnimation`] the one-off power on sweep.

use embassy_time::{Duration, Instant};

use crate::{
    color::{BLACK, Rgb, WHITE},
    effect::{CometEffect, Effect},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Strobe {
    Accent,
    Black,
    White,
}

/// One strobe cycle: color and how long it stays on, in milliseconds
const STROBE_PATTERN: [(Strobe, u64); 6] = [
    (Strobe::Accent, 10),
    (Strobe::Black, 30),
    (Strobe::White, 20),
    (Strobe::Black, 5),
    (Strobe::Accent, 10),
    (Strobe::Black, 30),
];

const STROBE_CYCLE_MS: u64 = {
    let mut total = 0;
    let mut i = 0;
    while i < STROBE_PATTERN.len() {
        total += STROBE_PATTERN[i].1;
        i += 1;
    }
    total
};

/// Lightning strobe with an accent color
///
/// Repeats accent, black, white, black, accent, black until `duration` has
/// passed since `started`.
#[derive(Debug, Clone)]
pub struct FlashAnimation {
    accent: Rgb,
    started: Instant,
    duration: Duration,
}

impl FlashAnimation {
    pub const fn new(accent: Rgb, started: Instant, duration: Duration) -> Self {
        Self {
            accent,
            started,
            duration,
        }
    }

    pub const fn accent(&self) -> Rgb {
        self.accent
    }

    /// Returns true once more than `duration` has elapsed
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) > self.duration
    }

    /// Fill color at `now`, or `None` when the flash is over
    pub fn color_at(&self, now: Instant) -> Option<Rgb> {
        if self.is_finished(now) {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let mut position = elapsed.as_millis() % STROBE_CYCLE_MS;
        for (strobe, length) in STROBE_PATTERN {
            if position < length {
                return Some(match strobe {
                    Strobe::Accent => self.accent,
                    Strobe::Black => BLACK,
                    Strobe::White => WHITE,
                });
            }
            position -= length;
        }
        Some(BLACK)
    }
}

/// Power on animation, a comet played once for a fixed time
#[derive(Debug, Clone)]
pub struct StartupAnimation<'a, const N: usize> {
    comet: CometEffect<'a, N>,
    duration: Duration,
    started: Option<Instant>,
}

impl<'a, const N: usize> StartupAnimation<'a, N> {
    pub const fn new(comet: CometEffect<'a, N>, duration: Duration) -> Self {
        Self {
            comet,
            duration,
            started: None,
        }
    }

    /// Step and draw the comet; returns false once the duration has passed
    ///
    /// The clock starts on the first call.
    pub fn play(&mut self, now: Instant, frame: &mut [Rgb; N]) -> bool {
        let started = *self.started.get_or_insert(now);
        if now.saturating_duration_since(started) > self.duration {
            return false;
        }
        self.comet.step(now);
        self.comet.render_into(frame);
        true
    }
}
