//! Common utilities used in graphics-related libraries

mod color;

pub use color::Color;
