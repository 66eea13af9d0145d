//! Tuning values of the skates

use embassy_time::Duration;

/// Brightness at power on
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;
/// Brightness change per Up/Down press
pub const BRIGHTNESS_STEP: f32 = 0.1;
/// Tempo at power on
pub const DEFAULT_TEMPO: f32 = 0.1;
/// Tempo change per Left/Right press
pub const TEMPO_STEP: f32 = 0.2;
/// `x² + y²` above which a reactive flash fires
pub const TILT_THRESHOLD: f32 = 200.0;

/// Configuration for the skate controller
#[derive(Debug, Clone, Copy)]
pub struct SkateConfig {
    pub brightness: f32,
    pub brightness_step: f32,
    pub tempo: f32,
    pub tempo_step: f32,
    pub tilt_threshold: f32,
    /// Length of the flash alert
    pub flash_duration: Duration,
    /// Length of the power on animation
    pub startup_duration: Duration,
    /// Ignore repeated remote "next" commands for this long
    pub next_holdoff: Duration,
    /// Ignore the physical button for this long after a press
    pub button_holdoff: Duration,
    /// Frame period while the strip is lit
    pub frame_interval: Duration,
    /// Frame period while the strip is off
    pub off_frame_interval: Duration,
    /// Seed for flash colors
    pub seed: u64,
}

impl SkateConfig {
    pub const DEFAULT: Self = Self {
        brightness: DEFAULT_BRIGHTNESS,
        brightness_step: BRIGHTNESS_STEP,
        tempo: DEFAULT_TEMPO,
        tempo_step: TEMPO_STEP,
        tilt_threshold: TILT_THRESHOLD,
        flash_duration: Duration::from_millis(1_000),
        startup_duration: Duration::from_millis(1_600),
        next_holdoff: Duration::from_millis(100),
        button_holdoff: Duration::from_millis(200),
        frame_interval: Duration::from_millis(10),
        off_frame_interval: Duration::from_millis(500),
        seed: 0x05CA_7E5D,
    };
}

impl Default for SkateConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
