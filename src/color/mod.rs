mod utils;

use smart_leds::RGB8;
pub use utils::{colorwheel, rgb_from_u32, scale_color};

pub type Rgb = RGB8;

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_2800);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const PURPLE: Rgb = rgb_from_u32(0xB4_00FF);
