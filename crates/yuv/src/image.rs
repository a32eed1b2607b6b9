use {crate::*, base::Vec2};

/// An owned, tightly packed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Like `new`, but rejects a buffer whose length does not match `format` at `size`.
    pub fn with_checked_len(
        size: Vec2<usize>,
        data: Vec<u8>,
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        let expected = format.buffer_len(size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::new(size, data, format))
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// RGBA bytes of pixel (x, y). Only meaningful for `Rgba8` images.
    pub fn rgba_at(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.size.x + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}
