use image::Texture;
use math::Color;

use crate::{Cell, RenderError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    #[must_use]
    pub const fn of(self, color: Color) -> f32 {
        match self {
            Self::Red => color.red(),
            Self::Green => color.green(),
            Self::Blue => color.blue(),
        }
    }
}

/// Three single-channel layers of equal size that together make up an RGB image
///
/// Layers are addressed by [Cell], so rows come first. Writes always replace
/// the previous value, nothing is blended.
#[derive(Clone, Debug, PartialEq)]
pub struct Layers {
    red: Texture<f32>,
    green: Texture<f32>,
    blue: Texture<f32>,
}

impl Layers {
    /// Split a texture of colors into its channels
    #[must_use]
    pub fn split(colors: &Texture<Color>) -> Self {
        Self {
            red: colors.map(|color| color.red()),
            green: colors.map(|color| color.green()),
            blue: colors.map(|color| color.blue()),
        }
    }

    /// Combine three separate channels
    ///
    /// Fails if the channels don't all have the same dimensions.
    pub fn from_channels(
        red: Texture<f32>,
        green: Texture<f32>,
        blue: Texture<f32>,
    ) -> Result<Self, RenderError> {
        let expected = shape_of(&red);
        for channel in [&green, &blue] {
            let found = shape_of(channel);
            if found != expected {
                return Err(RenderError::LayerShape { expected, found });
            }
        }

        Ok(Self { red, green, blue })
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.red.height()
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.red.width()
    }

    /// Set all three channels of a single pixel
    ///
    /// # Panics
    /// This function panics if the cell is outside of the layers
    #[inline]
    pub fn paint(&mut self, cell: Cell, color: Color) -> &mut Self {
        self.red.set_pixel(cell.col, cell.row, color.red());
        self.green.set_pixel(cell.col, cell.row, color.green());
        self.blue.set_pixel(cell.col, cell.row, color.blue());
        self
    }

    /// Set only one channel of a single pixel
    ///
    /// # Panics
    /// This function panics if the cell is outside of the layers
    #[inline]
    pub fn paint_channel(&mut self, channel: Channel, cell: Cell, color: Color) -> &mut Self {
        let value = channel.of(color);
        self.channel_mut(channel).set_pixel(cell.col, cell.row, value);
        self
    }

    /// # Panics
    /// This function panics if the cell is outside of the layers
    #[must_use]
    pub fn color_at(&self, cell: Cell) -> Color {
        Color::rgb(
            self.red.get_pixel(cell.col, cell.row),
            self.green.get_pixel(cell.col, cell.row),
            self.blue.get_pixel(cell.col, cell.row),
        )
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut Texture<f32> {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Magnify every channel by an integer factor, see [Texture::scaled_nearest]
    #[must_use]
    pub fn scaled_nearest(&self, factor: usize) -> Self {
        Self {
            red: self.red.scaled_nearest(factor),
            green: self.green.scaled_nearest(factor),
            blue: self.blue.scaled_nearest(factor),
        }
    }

    /// Return the `(red, green, blue)` channels
    #[must_use]
    pub fn into_channels(self) -> (Texture<f32>, Texture<f32>, Texture<f32>) {
        (self.red, self.green, self.blue)
    }
}

/// `(height, width)` of a channel
fn shape_of(channel: &Texture<f32>) -> (usize, usize) {
    (channel.height(), channel.width())
}
