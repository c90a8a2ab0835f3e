//! The first pass, one pixel per grid cell

use math::Color;

use crate::{Cell, CheckedState, EntityClass, Layers, Palette, PursuerSlot};

/// Layers at grid resolution
#[derive(Clone, Debug, PartialEq)]
pub struct CoarseLayers(Layers);

impl CoarseLayers {
    #[must_use]
    pub const fn layers(&self) -> &Layers {
        &self.0
    }

    /// # Panics
    /// This function panics if the cell is outside of the grid
    #[must_use]
    pub fn color_at(&self, cell: Cell) -> Color {
        self.0.color_at(cell)
    }
}

/// Paint every cell of the grid
///
/// Cells are painted in this order, later writes replace earlier ones:
/// 1. walls and passages
/// 2. power items
/// 3. the agent
/// 4. the pursuers, in slot order
/// 5. the origin cell, which always gets the wall color
///
/// Regular items are not visible at this resolution.
#[must_use]
pub fn compose(state: &CheckedState<'_>, palette: &Palette) -> CoarseLayers {
    let mut layers = Layers::split(&state.grid.tiles().map(|tile| palette.tile(tile)));

    // Colliding power items are not special-cased, the last one wins
    for cell in state.power_item_cells() {
        layers.paint(cell, palette.power_item);
    }

    layers.paint(state.agent_cell(), palette.agent);

    let mode = state.mode();
    for (cell, slot) in state.pursuer_cells().zip(PursuerSlot::ALL) {
        layers.paint(cell, palette.color(EntityClass::Pursuer(slot), mode));
    }

    layers.paint(Cell::ORIGIN, palette.wall);

    CoarseLayers(layers)
}
