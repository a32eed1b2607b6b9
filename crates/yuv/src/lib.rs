//! Planar YUV to RGBA conversion.
//!
//! A YUV `Image` is bound once per frame as a read-only `YuvFrame`, and the
//! per-pixel `Kernel` turns the samples at one coordinate into one RGBA
//! pixel. `Converter` runs the kernel over every coordinate of a frame in
//! parallel, and the `rgba_to_*` functions encode the result.

mod color;
pub use color::*;

mod convert;
pub use convert::*;

mod encode;
pub use encode::*;

mod error;
pub use error::*;

mod frame;
pub use frame::*;

mod image;
pub use image::*;

pub mod kernel;
pub use kernel::Kernel;

mod pixelformat;
pub use pixelformat::*;
