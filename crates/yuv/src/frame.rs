use {crate::*, base::Vec2};

/// Read access to the Y, U and V samples of a frame at luma coordinates.
///
/// `u` and `v` take the luma coordinate of the output pixel; mapping it to
/// the shared chroma sample of a subsampled plane is the implementor's job.
/// Coordinates must lie inside `size()`.
pub trait YuvSample: Sync {
    fn size(&self) -> Vec2<usize>;
    fn y(&self, x: usize, y: usize) -> u8;
    fn u(&self, x: usize, y: usize) -> u8;
    fn v(&self, x: usize, y: usize) -> u8;
}

/// A validated, borrowed view of a tightly packed YUV `Image`.
#[derive(Debug, Clone, Copy)]
pub struct YuvFrame<'a> {
    data: &'a [u8],
    size: Vec2<usize>,
    format: PixelFormat,
    shift: Vec2<u32>,
    u_offset: usize,
    v_offset: usize,
    chroma_stride: usize,
    // distance between two chroma samples of the same channel
    chroma_step: usize,
}

impl<'a> YuvFrame<'a> {
    pub fn new(image: &'a Image) -> Result<Self, ImageError> {
        Self::from_parts(image.size, &image.data, image.format)
    }

    pub fn from_parts(
        size: Vec2<usize>,
        data: &'a [u8],
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        let layout = format
            .chroma_layout()
            .ok_or_else(|| ImageError::Format(format!("{:?} is not a YUV format", format)))?;
        let expected = format.buffer_len(size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidLength {
                expected,
                actual: data.len(),
            });
        }

        let luma_len = size.area();
        let chroma = size.shr_ceil(layout.shift);
        let (first, second, chroma_stride, chroma_step) = if layout.interleaved {
            (luma_len, luma_len + 1, chroma.x * 2, 2)
        } else {
            (luma_len, luma_len + chroma.area(), chroma.x, 1)
        };
        let (u_offset, v_offset) = match layout.order {
            ChromaOrder::Uv => (first, second),
            ChromaOrder::Vu => (second, first),
        };

        Ok(Self {
            data,
            size,
            format,
            shift: layout.shift,
            u_offset,
            v_offset,
            chroma_stride,
            chroma_step,
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    fn chroma_index(&self, x: usize, y: usize) -> usize {
        (y >> self.shift.y) * self.chroma_stride + (x >> self.shift.x) * self.chroma_step
    }
}

impl YuvSample for YuvFrame<'_> {
    fn size(&self) -> Vec2<usize> {
        self.size
    }

    #[inline]
    fn y(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.size.x + x]
    }

    #[inline]
    fn u(&self, x: usize, y: usize) -> u8 {
        self.data[self.u_offset + self.chroma_index(x, y)]
    }

    #[inline]
    fn v(&self, x: usize, y: usize) -> u8 {
        self.data[self.v_offset + self.chroma_index(x, y)]
    }
}
