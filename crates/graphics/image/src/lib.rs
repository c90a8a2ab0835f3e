pub mod ppm;
mod texture;

pub use texture::Texture;
