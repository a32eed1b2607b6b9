use base::Vec2;
use yuv::{ColorConversion, ColorMatrix, ColorRange, Kernel, YuvSample, kernel};

/// A single-pixel source returning the same sample triple everywhere.
struct Solid(u8, u8, u8);

impl YuvSample for Solid {
    fn size(&self) -> Vec2<usize> {
        Vec2::new(1, 1)
    }
    fn y(&self, _x: usize, _y: usize) -> u8 {
        self.0
    }
    fn u(&self, _x: usize, _y: usize) -> u8 {
        self.1
    }
    fn v(&self, _x: usize, _y: usize) -> u8 {
        self.2
    }
}

fn assert_near(actual: [u8; 4], expected: [u8; 4]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (*a as i32 - *e as i32).abs() <= 1,
            "got {:?}, expected {:?}",
            actual,
            expected
        );
    }
}

#[test]
fn test_mid_gray() {
    assert_near(kernel::convert(&Solid(128, 128, 128), 0, 0), [128, 128, 128, 255]);
}

#[test]
fn test_white() {
    assert_near(kernel::convert(&Solid(255, 128, 128), 0, 0), [255, 255, 255, 255]);
}

#[test]
fn test_black() {
    assert_near(kernel::convert(&Solid(0, 128, 128), 0, 0), [0, 0, 0, 255]);
}

#[test]
fn test_extreme_chroma_clamps() {
    // U=0, V=255: red overflows, blue underflows
    let [r, _, b, a] = kernel::convert(&Solid(128, 0, 255), 0, 0);
    assert_eq!(r, 255);
    assert_eq!(b, 0);
    assert_eq!(a, 255);

    // U=255, V=0: blue overflows, red underflows
    let [r, _, b, _] = kernel::convert(&Solid(128, 255, 0), 0, 0);
    assert_eq!(r, 0);
    assert_eq!(b, 255);
}

#[test]
fn test_alpha_always_opaque() {
    let kernels = [
        Kernel::default(),
        Kernel::new(ColorConversion::new(ColorMatrix::Bt709, ColorRange::Full)),
        Kernel::new(ColorConversion::new(ColorMatrix::Bt601, ColorRange::Video)),
    ];
    for kernel in kernels {
        for y in (0..=255u16).step_by(17) {
            for u in (0..=255u16).step_by(15) {
                for v in (0..=255u16).step_by(15) {
                    let px = kernel.pixel(&Solid(y as u8, u as u8, v as u8), 0, 0);
                    assert_eq!(px[3], 255);
                }
            }
        }
    }
}

#[test]
fn test_matches_reference_formula() {
    // compares against the formula evaluated in f64
    for &(y, u, v) in &[(81u8, 90u8, 240u8), (145, 54, 34), (41, 240, 110), (200, 100, 150)] {
        let (yf, uf, vf) = (y as f64, u as f64 - 128.0, v as f64 - 128.0);
        let expected = [
            (yf + 1.402 * vf).clamp(0.0, 255.0) as u8,
            (yf - 0.344136 * uf - 0.714136 * vf).clamp(0.0, 255.0) as u8,
            (yf + 1.772 * uf).clamp(0.0, 255.0) as u8,
            255,
        ];
        assert_near(kernel::convert(&Solid(y, u, v), 0, 0), expected);
    }
}

#[test]
fn test_repeated_calls_agree() {
    let source = Solid(97, 201, 33);
    let first = kernel::convert(&source, 0, 0);
    for _ in 0..100 {
        assert_near(kernel::convert(&source, 0, 0), first);
    }
}

#[test]
fn test_video_range_endpoints() {
    let kernel = Kernel::new(ColorConversion::new(ColorMatrix::Bt601, ColorRange::Video));
    assert_near(kernel.pixel(&Solid(16, 128, 128), 0, 0), [0, 0, 0, 255]);
    assert_near(kernel.pixel(&Solid(235, 128, 128), 0, 0), [255, 255, 255, 255]);
    // below black and above white still clamp
    assert_eq!(kernel.pixel(&Solid(0, 128, 128), 0, 0), [0, 0, 0, 255]);
    assert_eq!(kernel.pixel(&Solid(255, 128, 128), 0, 0), [255, 255, 255, 255]);
}

#[test]
fn test_bt709_differs_from_bt601_for_color() {
    let bt601 = Kernel::default().pixel(&Solid(100, 60, 200), 0, 0);
    let bt709 = Kernel::new(ColorConversion::new(ColorMatrix::Bt709, ColorRange::Full))
        .pixel(&Solid(100, 60, 200), 0, 0);
    assert_ne!(bt601, bt709);

    // gray is matrix independent
    let gray709 = Kernel::new(ColorConversion::new(ColorMatrix::Bt709, ColorRange::Full))
        .pixel(&Solid(77, 128, 128), 0, 0);
    assert_eq!(gray709, [77, 77, 77, 255]);
}

/// Android RenderScript `rsYuvToRGBA_uchar4`: BT.601 video range, 8-bit fixed point.
fn renderscript_yuv_to_rgba(y: u8, u: u8, v: u8) -> [u8; 4] {
    let (y, u, v) = (y as i32 - 16, u as i32 - 128, v as i32 - 128);
    let r = (y * 298 + v * 409 + 128) >> 8;
    let g = (y * 298 - u * 100 - v * 208 + 128) >> 8;
    let b = (y * 298 + u * 516 + 128) >> 8;
    [
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
        255,
    ]
}

#[test]
fn test_bt601_video_matches_renderscript_reference() {
    let kernel = Kernel::new(ColorConversion::new(ColorMatrix::Bt601, ColorRange::Video));
    assert_eq!(kernel.pixel(&Solid(128, 128, 128), 0, 0), [130, 130, 130, 255]);
    for &(y, u, v) in &[(16u8, 128u8, 128u8), (235, 128, 128), (81, 90, 240), (145, 54, 34), (41, 240, 110)] {
        assert_near(
            kernel.pixel(&Solid(y, u, v), 0, 0),
            renderscript_yuv_to_rgba(y, u, v),
        );
    }
}

#[test]
fn test_bt601_video_within_one_of_renderscript_everywhere() {
    let conversion = ColorConversion::new(ColorMatrix::Bt601, ColorRange::Video);
    for y in (0..=255u16).step_by(3) {
        for u in (0..=255u16).step_by(5) {
            for v in (0..=255u16).step_by(5) {
                let (y, u, v) = (y as u8, u as u8, v as u8);
                assert_near(conversion.yuv_to_rgba(y, u, v), renderscript_yuv_to_rgba(y, u, v));
            }
        }
    }
}
