use crate::{color::Rgb, math8::scale8};

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Color wheel position to RGB
///
/// Transitions red -> green -> blue -> back to red over 0-255.
pub const fn colorwheel(position: u8) -> Rgb {
    let pos = position;
    if pos < 85 {
        Rgb {
            r: 255 - pos * 3,
            g: pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: 255 - pos * 3,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: pos * 3,
            g: 0,
            b: 255 - pos * 3,
        }
    }
}

/// Scale every channel of a color (0 = black, 255 = unchanged)
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    if scale == 255 {
        return color;
    }
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}
