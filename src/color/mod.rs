mod utils;

use core::ops::{Add, Mul};

use smart_leds::RGB8;
pub use utils::{scale_to_rgb8, unit_to_u8};

/// 8-bit output color used by LED drivers
pub type Rgb = RGB8;

/// Linear RGBA color with normalized channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

/// Color and intensity of a light, the value driven by fades
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightValue {
    pub color: Color,
    pub intensity: f32,
}

impl LightValue {
    /// Black at zero intensity
    pub const OFF: Self = Self::new(Color::BLACK, 0.0);

    pub const fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Blend between two values.
    ///
    /// `t` is the share of `previous` left in the result: `1.0` returns
    /// `previous`, `0.0` returns `target`.
    pub fn blend(previous: Self, target: Self, t: f32) -> Self {
        let rest = 1.0 - t;
        Self {
            color: previous.color * t + target.color * rest,
            intensity: previous.intensity * t + target.intensity * rest,
        }
    }

    /// Largest per-channel distance to `other`, intensity included
    pub fn distance(self, other: Self) -> f32 {
        [
            self.color.r - other.color.r,
            self.color.g - other.color.g,
            self.color.b - other.color.b,
            self.color.a - other.color.a,
            self.intensity - other.intensity,
        ]
        .into_iter()
        .map(libm::fabsf)
        .fold(0.0, f32::max)
    }
}
