//! Rasterizes maze game states into RGB frames
//!
//! Rendering happens in two passes. The coarse pass paints one pixel per grid
//! cell, which is then magnified by [UPSCALE_FACTOR]. The detail pass draws
//! single pixels (items, eyes, notches) onto the magnified layers, which are
//! finally stacked into a [Frame].
//!
//! ```
//! use render::{Grid, GridState, Position, Renderer, Tile};
//!
//! let grid = Grid::filled(3, 3, Tile::Passage);
//! let state = GridState::new(grid, Position::new(1, 1), &[Position::new(2, 2); 4])?;
//!
//! let frame = Renderer::default().render(&state)?;
//! assert_eq!(frame.shape(), (9, 9, 3));
//! # Ok::<(), render::RenderError>(())
//! ```

pub mod coarse;
mod composition;
mod config;
pub mod detail;
mod error;
pub mod frame;
mod layer;
mod palette;
mod state;
pub mod upscale;

pub use coarse::CoarseLayers;
pub use composition::Renderer;
pub use config::{MarkerAlignment, RenderConfig};
pub use error::RenderError;
pub use frame::Frame;
pub use layer::{Channel, Layers};
pub use palette::{EntityClass, Mode, Palette, PursuerSlot};
pub use state::{Cell, CheckedState, Entity, Grid, GridState, Position, Tile, PURSUER_COUNT};
pub use upscale::{FineLayers, UPSCALE_FACTOR};
