//! The binary `.ppm` (portable pixmap, `P6`) file format
//!
//! The format is described at <https://netpbm.sourceforge.net/doc/ppm.html>.
//! Only encoding is supported.

use math::Color;

use crate::Texture;

const PPM_MAGIC: &[u8; 2] = b"P6";

/// The largest value a channel may take, written into the header
const MAX_CHANNEL_VALUE: u8 = u8::MAX;

/// Encode a texture as a binary `P6` pixmap with 8 bits per channel
///
/// Channels are clamped to `[0, 1]` before quantization.
#[must_use]
pub fn encode(texture: &Texture<Color>) -> Vec<u8> {
    let header = format!(
        "{}\n{} {}\n{MAX_CHANNEL_VALUE}\n",
        String::from_utf8_lossy(PPM_MAGIC),
        texture.width(),
        texture.height()
    );

    let mut bytes = Vec::with_capacity(header.len() + texture.data().len() * 3);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend(texture.data().iter().flat_map(Color::to_rgb8));

    log::trace!(
        "Encoded {}x{} texture as ppm ({} bytes)",
        texture.width(),
        texture.height(),
        bytes.len()
    );

    bytes
}
