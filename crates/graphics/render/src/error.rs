use error_derive::Error;

use crate::Entity;

/// A violated rendering contract
///
/// All of these are caused by a malformed state or by mismatched buffers.
/// No pixels are produced when one of them occurs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    #[msg = "{entity} at row {row}, column {col} is outside of the {height}x{width} grid"]
    OutOfBounds {
        entity: Entity,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[msg = "expected exactly {expected} pursuers, found {found}"]
    PursuerCount { expected: usize, found: usize },

    #[msg = "a {height}x{width} grid needs {expected} cells, found {found}"]
    MaskSize {
        expected: usize,
        found: usize,
        height: usize,
        width: usize,
    },

    #[msg = "the grid does not contain any cells"]
    EmptyGrid,

    /// Dimensions are given as `(height, width)`
    #[msg = "layer has dimensions {found:?}, expected {expected:?}"]
    LayerShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
