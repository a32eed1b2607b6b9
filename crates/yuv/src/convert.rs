use {crate::*, rayon::prelude::*, std::time::Instant};

/// Configuration for frame conversion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvertConfig {
    matrix: ColorMatrix,
    range: ColorRange,
    threads: usize,
}

impl ConvertConfig {
    /// Set the YUV matrix the source was encoded with.
    pub fn with_matrix(mut self, matrix: ColorMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Set the YUV range the source was encoded with.
    pub fn with_range(mut self, range: ColorRange) -> Self {
        self.range = range;
        self
    }

    /// Set the worker count. 0 shares the global rayon pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    // Getters
    pub fn matrix(&self) -> ColorMatrix {
        self.matrix
    }

    pub fn range(&self) -> ColorRange {
        self.range
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn conversion(&self) -> ColorConversion {
        ColorConversion::new(self.matrix, self.range)
    }
}

/// Runs the pixel kernel over every coordinate of a frame.
#[derive(Debug, Default)]
pub struct Converter {
    kernel: Kernel,
    pool: Option<rayon::ThreadPool>,
}

impl Converter {
    pub fn new(config: &ConvertConfig) -> Result<Self, ImageError> {
        let pool = match config.threads() {
            0 => None,
            n => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("yuv-convert-{i}"))
                    .build()?,
            ),
        };
        Ok(Self {
            kernel: Kernel::new(config.conversion()),
            pool,
        })
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Convert a whole frame to `Rgba8`, one parallel task per output row.
    pub fn convert<S: YuvSample + ?Sized>(&self, source: &S) -> Image {
        let size = source.size();
        let mut data = vec![0u8; size.area() * 4];
        let start = Instant::now();

        let mut run = || self.fill(source, &mut data);
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }

        log::debug!("converted {} frame in {:?}", size, start.elapsed());
        Image::new(size, data, PixelFormat::Rgba8)
    }

    /// Bind `image` as a `YuvFrame` and convert it.
    pub fn convert_image(&self, image: &Image) -> Result<Image, ImageError> {
        let frame = YuvFrame::new(image).inspect_err(|e| {
            log::warn!("rejected {:?} {} frame: {}", image.format, image.size, e)
        })?;
        Ok(self.convert(&frame))
    }

    fn fill<S: YuvSample + ?Sized>(&self, source: &S, out: &mut [u8]) {
        let width = source.size().x;
        if width == 0 {
            return;
        }
        let kernel = &self.kernel;
        out.par_chunks_exact_mut(width * 4)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                    pixel.copy_from_slice(&kernel.pixel(source, x, y));
                }
            });
    }
}

/// Converts a YUV image to `Rgba8` with BT.601 full-range coefficients.
///
/// # Errors
///
/// Returns `ImageError::Format` if `image` is not a YUV format and
/// `ImageError::InvalidLength` if its buffer does not match its size.
pub fn yuv_to_rgba(image: &Image) -> Result<Image, ImageError> {
    Converter::default().convert_image(image)
}

/// Converts a YUV image to `Rgba8` on tokio's blocking thread pool.
pub async fn yuv_to_rgba_async(image: Image, config: ConvertConfig) -> Result<Image, ImageError> {
    tokio::task::spawn_blocking(move || Converter::new(&config)?.convert_image(&image)).await?
}
