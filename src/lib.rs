#![no_std]

pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod effect;
pub mod error;
pub mod flash;
pub mod frame;
pub mod frame_scheduler;
pub mod input;
pub mod math8;
pub mod sequencer;
pub mod show;
pub mod state;
pub mod topology;

pub use channel::{CommandChannel, CommandReceiver, CommandSender, QueueFull};
pub use command::{ButtonId, RemoteCommand};
pub use config::SkateConfig;
pub use controller::Controller;
pub use effect::{Effect, EffectKind, EffectSlot, StepOutcome};
pub use error::{ConfigError, InputError};
pub use frame::FrameBuffer;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{Acceleration, ButtonInput, CommandSource, InputDevices, MotionSensor};
pub use sequencer::{Entry, Playlist};
pub use state::{DeviceMode, RuntimeSettings, RuntimeState};
pub use topology::{PixelMap, SKATE_PIXELS, SkateTopologies, Topology};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The control loop is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Drive the strip power-enable line
    fn set_power(&mut self, enabled: bool);
}
