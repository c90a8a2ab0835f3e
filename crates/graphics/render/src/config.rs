/// Where the power item marker is drawn inside its magnified cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerAlignment {
    /// All three channels are written to the center pixel
    #[default]
    Centered,

    /// The red channel is written one row below the center, green and blue
    /// at the center. This matches frames produced by older renderers pixel
    /// for pixel.
    Shifted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub power_item_marker: MarkerAlignment,

    /// Treat items at `(0, 0)` as empty slots and don't draw them
    pub skip_origin_items: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            power_item_marker: MarkerAlignment::default(),
            skip_origin_items: true,
        }
    }
}
