//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{
    OutputDriver,
    controller::Controller,
    input::{ButtonInput, CommandSource, InputDevices, MotionSensor},
    state::{DeviceMode, RuntimeState},
};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Mode after this frame.
    pub mode: DeviceMode,
}

/// Portable frame scheduler that owns the whole control loop.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Runs one controller tick per frame and flushes it to the driver
/// - Toggles the strip power line only when it changes
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller, inputs, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O, C, B, M, const N: usize>
where
    O: OutputDriver,
    C: CommandSource,
    B: ButtonInput,
    M: MotionSensor,
{
    output: O,
    inputs: InputDevices<C, B, M>,
    controller: Controller<'a, N>,
    state: RuntimeState,
    power: Option<bool>,
    next_frame: Instant,
}

impl<'a, O, C, B, M, const N: usize> FrameScheduler<'a, O, C, B, M, N>
where
    O: OutputDriver,
    C: CommandSource,
    B: ButtonInput,
    M: MotionSensor,
{
    pub fn new(controller: Controller<'a, N>, inputs: InputDevices<C, B, M>, driver: O) -> Self {
        Self {
            output: driver,
            inputs,
            state: controller.initial_state(),
            controller,
            power: None,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Runs the controller tick
    /// 3. Switches the power line if needed and writes to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame_duration = self.frame_duration();

        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift = Duration::from_ticks(frame_duration.as_ticks() * 2);
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let frame = self
            .controller
            .tick(&mut self.state, &mut self.inputs, now);

        if self.power != Some(frame.power()) {
            self.output.set_power(frame.power());
            self.power = Some(frame.power());
        }
        frame.flush(&mut self.output);

        // Off mode idles at a slower rate
        self.next_frame += self.frame_duration();

        let sleep_duration = self.next_frame.saturating_duration_since(now);

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            mode: self.state.mode,
        }
    }

    fn frame_duration(&self) -> Duration {
        let config = self.controller.config();
        match self.state.mode {
            DeviceMode::Off => config.off_frame_interval,
            DeviceMode::Animate | DeviceMode::Flash => config.frame_interval,
        }
    }

    pub const fn state(&self) -> &RuntimeState {
        &self.state
    }

    pub const fn controller(&self) -> &Controller<'a, N> {
        &self.controller
    }

    pub const fn output(&self) -> &O {
        &self.output
    }
}
