use {crate::*, base::Vec2, std::str::FromStr};

// fourcc codes
pub(crate) const FOURCC_YU12: u32 = u32::from_le_bytes(*b"YU12");
pub(crate) const FOURCC_YV12: u32 = u32::from_le_bytes(*b"YV12");
pub(crate) const FOURCC_422P: u32 = u32::from_le_bytes(*b"422P");
pub(crate) const FOURCC_444P: u32 = u32::from_le_bytes(*b"444P");
pub(crate) const FOURCC_NV12: u32 = u32::from_le_bytes(*b"NV12");
pub(crate) const FOURCC_NV21: u32 = u32::from_le_bytes(*b"NV21");
pub(crate) const FOURCC_RGBA: u32 = u32::from_le_bytes(*b"RGBA");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// I420: Y plane, then U, then V, chroma halved on both axes.
    Yu12,
    /// Y plane, then V, then U, chroma halved on both axes.
    Yv12,
    /// Y, U, V planes, chroma halved horizontally.
    Yuv422p,
    /// Y, U, V planes at full resolution.
    Yuv444p,
    /// Y plane, then one plane of interleaved U/V pairs.
    Nv12,
    /// Y plane, then one plane of interleaved V/U pairs.
    Nv21,
    Rgba8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromaOrder {
    Uv,
    Vu,
}

/// How the chroma samples of a YUV format are arranged behind the luma plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromaLayout {
    /// Right shift applied to a luma coordinate to get its chroma coordinate.
    pub shift: Vec2<u32>,
    /// Both chroma channels share one plane, alternating per sample.
    pub interleaved: bool,
    pub order: ChromaOrder,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 7] = [
        PixelFormat::Yu12,
        PixelFormat::Yv12,
        PixelFormat::Yuv422p,
        PixelFormat::Yuv444p,
        PixelFormat::Nv12,
        PixelFormat::Nv21,
        PixelFormat::Rgba8,
    ];

    pub fn from_fourcc(fourcc: u32) -> Result<Self, ImageError> {
        match fourcc {
            FOURCC_YU12 => Ok(PixelFormat::Yu12),
            FOURCC_YV12 => Ok(PixelFormat::Yv12),
            FOURCC_422P => Ok(PixelFormat::Yuv422p),
            FOURCC_444P => Ok(PixelFormat::Yuv444p),
            FOURCC_NV12 => Ok(PixelFormat::Nv12),
            FOURCC_NV21 => Ok(PixelFormat::Nv21),
            FOURCC_RGBA => Ok(PixelFormat::Rgba8),
            _ => Err(ImageError::UnsupportedFormat(fourcc)),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Yu12 => FOURCC_YU12,
            PixelFormat::Yv12 => FOURCC_YV12,
            PixelFormat::Yuv422p => FOURCC_422P,
            PixelFormat::Yuv444p => FOURCC_444P,
            PixelFormat::Nv12 => FOURCC_NV12,
            PixelFormat::Nv21 => FOURCC_NV21,
            PixelFormat::Rgba8 => FOURCC_RGBA,
        }
    }

    pub fn chroma_layout(&self) -> Option<ChromaLayout> {
        let (shift, interleaved, order) = match self {
            PixelFormat::Yu12 => (Vec2::new(1, 1), false, ChromaOrder::Uv),
            PixelFormat::Yv12 => (Vec2::new(1, 1), false, ChromaOrder::Vu),
            PixelFormat::Yuv422p => (Vec2::new(1, 0), false, ChromaOrder::Uv),
            PixelFormat::Yuv444p => (Vec2::new(0, 0), false, ChromaOrder::Uv),
            PixelFormat::Nv12 => (Vec2::new(1, 1), true, ChromaOrder::Uv),
            PixelFormat::Nv21 => (Vec2::new(1, 1), true, ChromaOrder::Vu),
            PixelFormat::Rgba8 => return None,
        };
        Some(ChromaLayout {
            shift,
            interleaved,
            order,
        })
    }

    pub fn is_yuv(&self) -> bool {
        self.chroma_layout().is_some()
    }

    /// Exact byte length of a tightly packed buffer of this format at `size`.
    ///
    /// Fails with `ImageError::SizeOverflow` if the length does not fit in `usize`.
    pub fn buffer_len(&self, size: Vec2<usize>) -> Result<usize, ImageError> {
        let luma = size.checked_area();
        let len = match self.chroma_layout() {
            Some(layout) => size
                .shr_ceil(layout.shift)
                .checked_area()
                .and_then(|chroma| chroma.checked_mul(2))
                .zip(luma)
                .and_then(|(chroma, luma)| chroma.checked_add(luma)),
            None => luma.and_then(|luma| luma.checked_mul(4)),
        };
        len.ok_or(ImageError::SizeOverflow(size))
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Format(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }
}

impl FromStr for PixelFormat {
    type Err = ImageError;

    /// Accepts a fourcc (`YU12`, `NV21`, ...) or the common alias `I420`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "I420" {
            return Ok(PixelFormat::Yu12);
        }
        let bytes: [u8; 4] = upper
            .as_bytes()
            .try_into()
            .map_err(|_| ImageError::Format(format!("not a fourcc: {s:?}")))?;
        PixelFormat::from_fourcc(u32::from_le_bytes(bytes))
    }
}
