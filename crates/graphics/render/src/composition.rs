//! Running all passes in order

use crate::{coarse, detail, upscale, Frame, GridState, Palette, RenderConfig, RenderError};

/// Turns [GridStates](GridState) into [Frames](Frame)
///
/// A renderer holds no per-frame state, so one instance can be shared
/// between threads and used for any number of frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Renderer {
    palette: Palette,
    config: RenderConfig,
}

impl Renderer {
    #[must_use]
    pub const fn new(palette: Palette, config: RenderConfig) -> Self {
        Self { palette, config }
    }

    /// Render a single state
    ///
    /// Nothing is drawn if any entity lies outside of the grid.
    pub fn render(&self, state: &GridState) -> Result<Frame, RenderError> {
        let state = state.check()?;

        log::trace!(
            "Rendering {}x{} grid in {:?} mode ({} items, {} power items)",
            state.grid.height(),
            state.grid.width(),
            state.mode(),
            state.items.len(),
            state.power_items.len()
        );

        let coarse = coarse::compose(&state, &self.palette);
        let fine = upscale::magnify(&coarse);
        let fine = detail::decorate(fine, &state, &self.palette, &self.config)?;

        fine.into_frame()
    }

    /// Render a sequence of states, in order
    ///
    /// Every state is rendered independently of the others.
    pub fn render_all<'a, I>(
        &'a self,
        states: I,
    ) -> impl Iterator<Item = Result<Frame, RenderError>> + 'a
    where
        I: IntoIterator<Item = &'a GridState>,
        I::IntoIter: 'a,
    {
        states.into_iter().map(|state| self.render(state))
    }
}
