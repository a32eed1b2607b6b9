use std::str::FromStr;

use crate::ImageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMatrix {
    #[default]
    Bt601,
    Bt709,
}

impl ColorMatrix {
    /// Luma weights (Kr, Kb) of the red and blue primaries.
    pub fn kr_kb(&self) -> (f32, f32) {
        match self {
            ColorMatrix::Bt601 => (0.299, 0.114),
            ColorMatrix::Bt709 => (0.2126, 0.0722),
        }
    }
}

impl FromStr for ColorMatrix {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bt601" | "601" => Ok(ColorMatrix::Bt601),
            "bt709" | "709" => Ok(ColorMatrix::Bt709),
            _ => Err(ImageError::Format(format!("unknown color matrix: {s:?}"))),
        }
    }
}

/// Full range uses 0..=255 for every channel; video range puts luma in 16..=235
/// and chroma in 16..=240.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorRange {
    #[default]
    Full,
    Video,
}

impl FromStr for ColorRange {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "pc" => Ok(ColorRange::Full),
            "video" | "limited" | "tv" => Ok(ColorRange::Video),
            _ => Err(ImageError::Format(format!("unknown color range: {s:?}"))),
        }
    }
}

/// Coefficients of one YUV to RGB transform.
///
/// With `y' = (Y - y_offset) * y_scale`, `u' = U - 128` and `v' = V - 128`:
///
/// ```text
/// R = y' + r_v * v'
/// G = y' - g_u * u' - g_v * v'
/// B = y' + b_u * u'
/// ```
///
/// The default is BT.601 full range (1.402, 0.344136, 0.714136, 1.772).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConversion {
    pub y_offset: f32,
    pub y_scale: f32,
    pub r_v: f32,
    pub g_u: f32,
    pub g_v: f32,
    pub b_u: f32,
}

impl ColorConversion {
    pub fn new(matrix: ColorMatrix, range: ColorRange) -> Self {
        let (kr, kb) = matrix.kr_kb();
        let kg = 1.0 - kr - kb;
        let r_v = 2.0 * (1.0 - kr);
        let b_u = 2.0 * (1.0 - kb);
        let (y_offset, y_scale, c_scale) = match range {
            ColorRange::Full => (0.0, 1.0, 1.0),
            ColorRange::Video => (16.0, 255.0 / 219.0, 255.0 / 224.0),
        };
        Self {
            y_offset,
            y_scale,
            r_v: r_v * c_scale,
            g_u: b_u * kb / kg * c_scale,
            g_v: r_v * kr / kg * c_scale,
            b_u: b_u * c_scale,
        }
    }

    /// Convert one sample triple to an opaque RGBA pixel.
    ///
    /// Each channel is clamped to [0, 255] and then truncated.
    #[inline]
    pub fn yuv_to_rgba(&self, y: u8, u: u8, v: u8) -> [u8; 4] {
        let y = (y as f32 - self.y_offset) * self.y_scale;
        let u = u as f32 - 128.0;
        let v = v as f32 - 128.0;
        let r = y + self.r_v * v;
        let g = y - self.g_u * u - self.g_v * v;
        let b = y + self.b_u * u;
        [
            r.clamp(0.0, 255.0) as u8,
            g.clamp(0.0, 255.0) as u8,
            b.clamp(0.0, 255.0) as u8,
            0xFF,
        ]
    }
}

impl Default for ColorConversion {
    fn default() -> Self {
        Self::new(ColorMatrix::Bt601, ColorRange::Full)
    }
}
