//! Mode and event state machine
//!
//! Merges remote commands, the physical button and the motion sensor into
//! one [`DeviceMode`], then renders the frame for that mode. Each tick
//! polls at most one remote command.
//!
//! The flash alert is not interruptible: while it plays no input is polled,
//! and queued commands are handled once it ends.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::{Rgb, colorwheel},
    command::{ButtonId, RemoteCommand},
    config::SkateConfig,
    flash::{FlashAnimation, StartupAnimation},
    frame::FrameBuffer,
    input::{ButtonInput, CommandSource, Debouncer, InputDevices, MotionSensor},
    sequencer::Playlist,
    state::{DeviceMode, RuntimeState},
};

/// The control core: playlist, frame and the timers that go with them
pub struct Controller<'a, const N: usize> {
    config: SkateConfig,
    playlist: Playlist<'a, N>,
    frame: FrameBuffer<N>,
    flash: Option<FlashAnimation>,
    startup: Option<StartupAnimation<'a, N>>,
    next_debounce: Debouncer,
    button_debounce: Debouncer,
    rng: fastrand::Rng,
}

impl<'a, const N: usize> Controller<'a, N> {
    pub fn new(config: SkateConfig, mut playlist: Playlist<'a, N>) -> Self {
        let state = RuntimeState::new(&config);
        playlist.apply_tempo(state.settings.tempo());
        Self {
            playlist,
            frame: FrameBuffer::new(state.settings.brightness_u8()),
            flash: None,
            startup: None,
            next_debounce: Debouncer::new(config.next_holdoff),
            button_debounce: Debouncer::new(config.button_holdoff),
            rng: fastrand::Rng::with_seed(config.seed),
            config,
        }
    }

    /// Play `startup` before the first input is polled
    #[must_use]
    pub fn with_startup(mut self, startup: StartupAnimation<'a, N>) -> Self {
        self.startup = Some(startup);
        self
    }

    pub const fn config(&self) -> &SkateConfig {
        &self.config
    }

    pub const fn playlist(&self) -> &Playlist<'a, N> {
        &self.playlist
    }

    pub const fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub const fn flash(&self) -> Option<&FlashAnimation> {
        self.flash.as_ref()
    }

    pub const fn is_starting_up(&self) -> bool {
        self.startup.is_some()
    }

    /// Initial runtime state matching this controller's configuration
    pub fn initial_state(&self) -> RuntimeState {
        RuntimeState::new(&self.config)
    }

    /// Run one iteration of the control loop and return the frame to flush
    pub fn tick<C, B, M>(
        &mut self,
        state: &mut RuntimeState,
        inputs: &mut InputDevices<C, B, M>,
        now: Instant,
    ) -> &FrameBuffer<N>
    where
        C: CommandSource,
        B: ButtonInput,
        M: MotionSensor,
    {
        if self.play_startup(state, now) {
            return &self.frame;
        }

        if state.mode == DeviceMode::Flash {
            if self.render_flash(now) {
                return &self.frame;
            }
            self.finish_flash(state);
        }

        self.poll_remote(state, &mut inputs.remote, now);
        if state.mode == DeviceMode::Animate {
            self.poll_button(state, &mut inputs.button, now);
        }
        if state.mode == DeviceMode::Animate && state.reactive_flash {
            self.poll_sensor(state, &mut inputs.sensor, now);
        }

        self.render(state, now);
        &self.frame
    }

    /// Apply one remote command
    pub fn handle_command(
        &mut self,
        state: &mut RuntimeState,
        command: RemoteCommand,
        now: Instant,
    ) {
        #[cfg(feature = "esp32-log")]
        println!("[Controller] command {:?} in {}", command, state.mode.as_str());

        let id = match command {
            RemoteCommand::ColorSet(color) => {
                // The strip is unpowered while off
                if state.mode != DeviceMode::Off {
                    state.held_color = Some(color);
                }
                return;
            }
            RemoteCommand::Button { pressed: false, .. } => return,
            RemoteCommand::Button { id, pressed: true } => id,
        };

        state.held_color = None;
        match id {
            ButtonId::Btn1 => Self::toggle_power(state),
            ButtonId::Btn2 => {
                if self.next_debounce.accept(now) {
                    self.playlist.advance_to_next();
                }
            }
            ButtonId::Btn3 => {
                let accent = self.random_accent();
                self.start_flash(state, accent, now);
            }
            ButtonId::Btn4 => state.reactive_flash = !state.reactive_flash,
            ButtonId::Left => {
                state.settings.slow_down();
                self.playlist.apply_tempo(state.settings.tempo());
            }
            ButtonId::Right => {
                state.settings.speed_up();
                self.playlist.apply_tempo(state.settings.tempo());
            }
            ButtonId::Up => state.settings.brighten(),
            ButtonId::Down => state.settings.dim(),
        }
    }

    /// Switch to flash mode with the given accent color
    pub fn start_flash(&mut self, state: &mut RuntimeState, accent: Rgb, now: Instant) {
        if state.mode != DeviceMode::Flash {
            state.last_mode = state.mode;
        }
        state.mode = DeviceMode::Flash;
        state.held_color = None;
        self.flash = Some(FlashAnimation::new(accent, now, self.config.flash_duration));
    }

    fn toggle_power(state: &mut RuntimeState) {
        state.mode = match state.mode {
            DeviceMode::Off => DeviceMode::Animate,
            DeviceMode::Animate | DeviceMode::Flash => DeviceMode::Off,
        };
    }

    fn random_accent(&mut self) -> Rgb {
        colorwheel(self.rng.u8(..))
    }

    fn poll_remote<C: CommandSource>(
        &mut self,
        state: &mut RuntimeState,
        remote: &mut C,
        now: Instant,
    ) {
        match remote.poll() {
            Ok(Some(command)) => self.handle_command(state, command, now),
            Ok(None) => {}
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller] remote poll failed: {}", _error);
            }
        }
    }

    fn poll_button<B: ButtonInput>(
        &mut self,
        state: &mut RuntimeState,
        button: &mut B,
        now: Instant,
    ) {
        if button.is_low() && self.button_debounce.accept(now) {
            state.held_color = None;
            self.playlist.advance_to_next();
        }
    }

    fn poll_sensor<M: MotionSensor>(
        &mut self,
        state: &mut RuntimeState,
        sensor: &mut M,
        now: Instant,
    ) {
        match sensor.read_acceleration() {
            Ok(reading) if reading.tilt() > self.config.tilt_threshold => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller] tilted: {}", reading.tilt());

                let accent = self.random_accent();
                self.start_flash(state, accent, now);
            }
            Ok(_) => {}
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[Controller] sensor read failed: {}", _error);
            }
        }
    }

    /// Returns true while the startup animation owns the frame
    fn play_startup(&mut self, state: &RuntimeState, now: Instant) -> bool {
        let Some(startup) = self.startup.as_mut() else {
            return false;
        };
        self.frame.set_power(true);
        self.frame.set_brightness(state.settings.brightness_u8());
        if startup.play(now, self.frame.pixels_mut()) {
            return true;
        }
        self.startup = None;
        self.frame.clear();
        false
    }

    /// Draws the flash frame; returns false once the flash is over
    fn render_flash(&mut self, now: Instant) -> bool {
        let Some(color) = self.flash.as_ref().and_then(|flash| flash.color_at(now))
        else {
            return false;
        };
        self.frame.set_power(true);
        self.frame.set_brightness(u8::MAX);
        self.frame.fill(color);
        true
    }

    fn finish_flash(&mut self, state: &mut RuntimeState) {
        self.flash = None;
        state.mode = state.last_mode;
        self.frame.clear();
        self.playlist.reset_current();
    }

    fn render(&mut self, state: &RuntimeState, now: Instant) {
        match state.mode {
            DeviceMode::Off => {
                self.frame.set_power(false);
                self.frame.clear();
            }
            DeviceMode::Animate => {
                self.frame.set_power(true);
                self.frame.set_brightness(state.settings.brightness_u8());
                match state.held_color {
                    Some(color) => self.frame.fill(color),
                    None => self.playlist.tick(now, self.frame.pixels_mut()),
                }
            }
            DeviceMode::Flash => {
                self.render_flash(now);
            }
        }
    }
}
