/// A rectangular, row-major grid of values
///
/// Coordinates are always given as `(x, y)`, where `x` is the column
/// and `y` is the row.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Texture<T> {
    /// Create a texture where every pixel has the same value
    #[must_use]
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Get the pixel value at the given coordinates
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    #[must_use]
    pub fn get_pixel(&self, x: usize, y: usize) -> T {
        self.data[self.index_of_pixel(x, y)]
    }

    /// Magnify the texture by an integer factor without interpolation
    ///
    /// Every pixel is replicated into a `factor × factor` block at the
    /// corresponding offset of the result, which is `factor` times as wide
    /// and `factor` times as high. A factor of zero produces an empty texture.
    #[must_use]
    pub fn scaled_nearest(&self, factor: usize) -> Self {
        let width = self.width * factor;
        let height = self.height * factor;

        let mut data = Vec::with_capacity(width * height);
        for row in self.data.chunks_exact(self.width.max(1)).take(self.height) {
            let mut scaled_row = Vec::with_capacity(width);
            for &value in row {
                scaled_row.extend(std::iter::repeat(value).take(factor));
            }

            for _ in 0..factor {
                data.extend_from_slice(&scaled_row);
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Apply `f` to every pixel, producing a texture of the same size
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Texture<U>
    where
        F: FnMut(T) -> U,
    {
        Texture {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

impl<T> Texture<T> {
    #[must_use]
    pub fn from_data(data: Vec<T>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height);

        Self {
            width,
            height,
            data,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Set the pixel at the given coordinates to the specified value.
    ///
    /// # Panics
    /// This function panics if the coordinates are outside of the texture
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: T) {
        let index = self.index_of_pixel(x, y);
        self.data[index] = pixel;
    }

    /// Calculate the index of the pixel data for a given set of coordinates
    #[must_use]
    fn index_of_pixel(&self, x: usize, y: usize) -> usize {
        // A column past the right edge would silently wrap into the next row
        assert!(
            self.contains(x, y),
            "pixel ({x}, {y}) is outside of a {}x{} texture",
            self.width,
            self.height
        );

        y * self.width + x
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Return `true` if the coordinates are inside the bounds of the texture
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }
}
