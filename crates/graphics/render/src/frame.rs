//! The finished RGB image

use image::Texture;
use math::Color;

use crate::{Layers, RenderError};

/// A rendered image with normalized floating point channels
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pixels: Texture<Color>,
}

impl Frame {
    #[must_use]
    pub const fn height(&self) -> usize {
        self.pixels.height()
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.pixels.width()
    }

    /// `(height, width, channels)`, matching the layout of [Frame::to_channels]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize, usize) {
        (self.height(), self.width(), 3)
    }

    /// # Panics
    /// This function panics if the pixel is outside of the frame
    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> Color {
        self.pixels.get_pixel(col, row)
    }

    #[must_use]
    pub fn texture(&self) -> &Texture<Color> {
        &self.pixels
    }

    /// Row-major values with the channel as the innermost dimension
    #[must_use]
    pub fn to_channels(&self) -> Vec<f32> {
        self.pixels
            .data()
            .iter()
            .flat_map(|color| color.channels())
            .collect()
    }
}

/// Stack three channels into a frame
///
/// Fails if the channels don't all have the same dimensions.
pub fn assemble(
    red: Texture<f32>,
    green: Texture<f32>,
    blue: Texture<f32>,
) -> Result<Frame, RenderError> {
    let (red, green, blue) = Layers::from_channels(red, green, blue)?.into_channels();

    let pixels = red
        .data()
        .iter()
        .zip(green.data())
        .zip(blue.data())
        .map(|((&red, &green), &blue)| Color::rgb(red, green, blue))
        .collect();

    Ok(Frame {
        pixels: Texture::from_data(pixels, red.width(), red.height()),
    })
}
