use crate::color::{Color, Rgb};

/// Convert a normalized channel (0.0-1.0) to 0-255, clamping out of range input
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    libm::roundf(clamped * 255.0) as u8
}

/// Scale a color by light intensity and quantize it for output
///
/// # Arguments
/// * `color` - Normalized color
/// * `intensity` - Relative intensity (0.0 = dark, 1.0 = full)
#[inline]
pub fn scale_to_rgb8(color: Color, intensity: f32) -> Rgb {
    let scale = color.a * intensity;
    Rgb {
        r: unit_to_u8(color.r * scale),
        g: unit_to_u8(color.g * scale),
        b: unit_to_u8(color.b * scale),
    }
}
