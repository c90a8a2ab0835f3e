//! Magnification from grid resolution to pixel resolution

use math::Color;

use crate::{frame, Cell, CoarseLayers, Frame, Layers, RenderError};

/// Every grid cell becomes a square block of this many pixels per side
pub const UPSCALE_FACTOR: usize = 3;

/// Layers at pixel resolution, [UPSCALE_FACTOR] times larger than the grid
#[derive(Clone, Debug, PartialEq)]
pub struct FineLayers(Layers);

impl FineLayers {
    #[must_use]
    pub const fn layers(&self) -> &Layers {
        &self.0
    }

    pub(crate) fn layers_mut(&mut self) -> &mut Layers {
        &mut self.0
    }

    /// # Panics
    /// This function panics if the pixel is outside of the layers
    #[must_use]
    pub fn color_at(&self, pixel: Cell) -> Color {
        self.0.color_at(pixel)
    }

    /// Stack the layers into the final image
    pub fn into_frame(self) -> Result<Frame, RenderError> {
        let (red, green, blue) = self.0.into_channels();
        frame::assemble(red, green, blue)
    }
}

/// Replicate every coarse cell into an `UPSCALE_FACTOR × UPSCALE_FACTOR` block
#[must_use]
pub fn magnify(coarse: &CoarseLayers) -> FineLayers {
    FineLayers(coarse.layers().scaled_nearest(UPSCALE_FACTOR))
}
