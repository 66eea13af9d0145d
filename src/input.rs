//! Input collaborators and debouncing
//!
//! The controller polls these once per tick. None of them may block.

use embassy_time::{Duration, Instant};

use crate::{command::RemoteCommand, error::InputError};

/// Source of decoded remote commands
pub trait CommandSource {
    /// Take the next command, if one is waiting
    fn poll(&mut self) -> Result<Option<RemoteCommand>, InputError>;
}

/// Physical push button, active low
pub trait ButtonInput {
    /// Sample the pin; low means pressed
    fn is_low(&mut self) -> bool;
}

/// Accelerometer
pub trait MotionSensor {
    fn read_acceleration(&mut self) -> Result<Acceleration, InputError>;
}

/// Acceleration reading in the sensor's native units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Tilt and rotation magnitude, `x² + y²`
    pub fn tilt(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

/// All inputs polled by the controller
#[derive(Debug)]
pub struct InputDevices<C, B, M> {
    pub remote: C,
    pub button: B,
    pub sensor: M,
}

impl<C: CommandSource, B: ButtonInput, M: MotionSensor> InputDevices<C, B, M> {
    pub const fn new(remote: C, button: B, sensor: M) -> Self {
        Self {
            remote,
            button,
            sensor,
        }
    }
}

/// Hold-off window after an accepted trigger
///
/// Triggers arriving before the window closes are dropped.
#[derive(Debug, Clone)]
pub struct Debouncer {
    holdoff: Duration,
    until: Option<Instant>,
}

impl Debouncer {
    pub const fn new(holdoff: Duration) -> Self {
        Self {
            holdoff,
            until: None,
        }
    }

    /// Accept a trigger at `now` unless still inside the hold-off window
    pub fn accept(&mut self, now: Instant) -> bool {
        if self.until.is_some_and(|until| now < until) {
            return false;
        }
        self.until = Some(now + self.holdoff);
        true
    }
}
