use std::fmt;

/// A color with three normalized floating point channels
///
/// Every channel is expected to lie within `[0, 1]`. Values outside of that
/// range are kept as-is and only clamped when the color is quantized.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Color([f32; 3]);

impl Color {
    pub const BLACK: Self = Self::rgb(0., 0., 0.);
    pub const WHITE: Self = Self::rgb(1., 1., 1.);
    pub const RED: Self = Self::rgb(1., 0., 0.);
    pub const BLUE: Self = Self::rgb(0., 0., 1.);

    #[inline]
    #[must_use]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self([red, green, blue])
    }

    #[inline]
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    #[must_use]
    pub const fn channels(&self) -> [f32; 3] {
        self.0
    }

    /// Quantize the color to 8 bits per channel
    ///
    /// Channels are clamped to `[0, 1]` first, so out-of-range values saturate.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.0
            .map(|channel| (channel.clamp(0., 1.) * f32::from(u8::MAX)).round() as u8)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red(), self.green(), self.blue())
    }
}
