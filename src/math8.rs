/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Map `part / whole` onto 0-255
///
/// Returns 255 when `part >= whole` and 0 for an empty whole.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fraction8(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    if part >= whole {
        return 255;
    }
    ((part * 255) / whole) as u8
}

/// Convert a unit float (0.0-1.0) to 0-255, clamping out of range values
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= 1.0 {
        return 255;
    }
    libm::roundf(value * 255.0) as u8
}
