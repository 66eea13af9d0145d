//! Runtime state owned by the control loop
//!
//! Everything a command can change lives in [`RuntimeState`], which is
//! passed by exclusive reference into every tick.

use crate::{color::Rgb, config::SkateConfig, math8::unit_to_u8};

/// Operating mode of the skates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceMode {
    /// Strip unpowered and blank
    Off,
    /// Playlist drives the strip
    #[default]
    Animate,
    /// Fixed alert pattern, returns to the previous mode when done
    Flash,
}

impl DeviceMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Animate => "animate",
            Self::Flash => "flash",
        }
    }
}

/// Brightness and tempo, both kept within `0.0..=1.0`
///
/// Values are rounded to hundredths after every change so repeated steps
/// land exactly on the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeSettings {
    brightness: f32,
    brightness_step: f32,
    tempo: f32,
    tempo_step: f32,
}

impl RuntimeSettings {
    pub fn new(config: &SkateConfig) -> Self {
        Self {
            brightness: clamp_unit(config.brightness),
            brightness_step: config.brightness_step,
            tempo: clamp_unit(config.tempo),
            tempo_step: config.tempo_step,
        }
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Brightness on the 0-255 scale used by the frame buffer
    pub fn brightness_u8(&self) -> u8 {
        unit_to_u8(self.brightness)
    }

    /// Tempo, larger is slower
    pub const fn tempo(&self) -> f32 {
        self.tempo
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = clamp_unit(brightness);
    }

    pub fn set_tempo(&mut self, tempo: f32) {
        self.tempo = clamp_unit(tempo);
    }

    pub fn brighten(&mut self) {
        self.set_brightness(self.brightness + self.brightness_step);
    }

    pub fn dim(&mut self) {
        self.set_brightness(self.brightness - self.brightness_step);
    }

    /// Raise the tempo, slowing every effect down
    pub fn slow_down(&mut self) {
        self.set_tempo(self.tempo + self.tempo_step);
    }

    /// Lower the tempo, speeding every effect up
    pub fn speed_up(&mut self) {
        self.set_tempo(self.tempo - self.tempo_step);
    }
}

/// Clamp to `0.0..=1.0` and round to hundredths, NaN becomes 0
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    libm::roundf(value.clamp(0.0, 1.0) * 100.0) / 100.0
}

/// Mutable state of the control loop
#[derive(Debug, Clone)]
pub struct RuntimeState {
    pub mode: DeviceMode,
    /// Mode to return to when a flash ends
    pub last_mode: DeviceMode,
    pub settings: RuntimeSettings,
    /// Fire a flash when the sensor crosses the tilt threshold
    pub reactive_flash: bool,
    /// Color set directly by the remote, shown instead of the playlist
    pub held_color: Option<Rgb>,
}

impl RuntimeState {
    pub fn new(config: &SkateConfig) -> Self {
        Self {
            mode: DeviceMode::Animate,
            last_mode: DeviceMode::Animate,
            settings: RuntimeSettings::new(config),
            reactive_flash: false,
            held_color: None,
        }
    }
}
