use {
    crate::*,
    crates_image::{ExtendedColorType, ImageEncoder, RgbaImage},
};

impl Image {
    /// Copy an `Rgba8` image into an `image::RgbaImage`.
    pub fn to_rgba_buffer(&self) -> Result<RgbaImage, ImageError> {
        self.format.ensure_format(PixelFormat::Rgba8)?;
        let expected = self.format.buffer_len(self.size)?;
        RgbaImage::from_raw(self.size.x as u32, self.size.y as u32, self.data.clone()).ok_or(
            ImageError::InvalidLength {
                expected,
                actual: self.data.len(),
            },
        )
    }
}

fn check_rgba(image: &Image) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgba8)?;
    let expected = image.format.buffer_len(image.size)?;
    if image.data.len() != expected {
        return Err(ImageError::InvalidLength {
            expected,
            actual: image.data.len(),
        });
    }
    Ok(())
}

/// Encodes an `Rgba8` image as PNG, keeping alpha.
pub fn rgba_to_png(image: &Image) -> Result<Vec<u8>, ImageError> {
    check_rgba(image)?;
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer).write_image(
        &image.data,
        image.size.x as u32,
        image.size.y as u32,
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

/// Encodes an `Rgba8` image as JPEG. Alpha is dropped.
///
/// The `quality` parameter controls JPEG compression (1-100, higher = better quality).
pub fn rgba_to_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    check_rgba(image)?;
    let rgb: Vec<u8> = image
        .data
        .chunks_exact(4)
        .flat_map(|c| [c[0], c[1], c[2]])
        .collect();
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
        &rgb,
        image.size.x as u32,
        image.size.y as u32,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}
