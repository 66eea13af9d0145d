//! Render/flush boundary
//!
//! The frame buffer holds unscaled physical pixels together with the
//! brightness and power state they are meant to be shown with. Brightness is
//! applied only while flushing, from the same borrow as the pixels, so a
//! flush never mixes one frame with another frame's brightness.

use crate::{
    OutputDriver,
    color::{BLACK, Rgb, scale_color},
};

#[derive(Debug, Clone)]
pub struct FrameBuffer<const N: usize> {
    pixels: [Rgb; N],
    brightness: u8,
    power: bool,
}

impl<const N: usize> FrameBuffer<N> {
    pub const fn new(brightness: u8) -> Self {
        Self {
            pixels: [BLACK; N],
            brightness,
            power: true,
        }
    }

    /// Physical pixels before brightness scaling
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub const fn pixels_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.pixels
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// State of the strip power-enable line
    pub const fn power(&self) -> bool {
        self.power
    }

    pub fn set_power(&mut self, power: bool) {
        self.power = power;
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Pixels with brightness applied, as sent to the driver
    pub fn scaled(&self) -> [Rgb; N] {
        let mut output = self.pixels;
        match self.brightness {
            255 => {}
            0 => output.fill(BLACK),
            brightness => {
                for pixel in &mut output {
                    *pixel = scale_color(*pixel, brightness);
                }
            }
        }
        output
    }

    /// Hand the scaled frame to the hardware
    pub fn flush<O: OutputDriver>(&self, driver: &mut O) {
        driver.write(&self.scaled());
    }
}
