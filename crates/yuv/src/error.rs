use {base::Vec2, std::fmt};

#[derive(Debug)]
pub enum ImageError {
    UnsupportedFormat(u32),
    Format(String),
    InvalidLength { expected: usize, actual: usize },
    SizeOverflow(Vec2<usize>),
    Encode(String),
    Task(String),
    ThreadPool(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat(fourcc) => write!(
                f,
                "unsupported pixel format: {}",
                crate::fourcc_to_string(*fourcc)
            ),
            ImageError::Format(msg) => write!(f, "format error: {msg}"),
            ImageError::InvalidLength { expected, actual } => {
                write!(f, "invalid buffer length: expected {expected} bytes, got {actual}")
            }
            ImageError::SizeOverflow(size) => {
                write!(f, "frame size {size} overflows the buffer length")
            }
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Task(msg) => write!(f, "task error: {msg}"),
            ImageError::ThreadPool(msg) => write!(f, "thread pool error: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Encode(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for ImageError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        ImageError::ThreadPool(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ImageError {
    fn from(err: tokio::task::JoinError) -> Self {
        ImageError::Task(err.to_string())
    }
}
