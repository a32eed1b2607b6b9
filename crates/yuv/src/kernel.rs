//! The per-pixel transform.
//!
//! `Kernel::pixel` is the element function that a dispatcher calls once for
//! every output coordinate. It holds no mutable state, so one kernel can be
//! shared by any number of workers.

use crate::{ColorConversion, YuvSample};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kernel {
    conversion: ColorConversion,
}

impl Kernel {
    pub fn new(conversion: ColorConversion) -> Self {
        Self { conversion }
    }

    pub fn conversion(&self) -> &ColorConversion {
        &self.conversion
    }

    /// RGBA pixel for luma coordinate (x, y) of `source`, which must be in bounds.
    #[inline]
    pub fn pixel<S: YuvSample + ?Sized>(&self, source: &S, x: usize, y: usize) -> [u8; 4] {
        self.conversion
            .yuv_to_rgba(source.y(x, y), source.u(x, y), source.v(x, y))
    }
}

/// `Kernel::pixel` with BT.601 full-range coefficients.
pub fn convert<S: YuvSample + ?Sized>(source: &S, x: usize, y: usize) -> [u8; 4] {
    Kernel::default().pixel(source, x, y)
}
