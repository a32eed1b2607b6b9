use base::Vec2;
use yuv::{ImageError, PixelFormat, fourcc_to_string};

#[test]
fn test_fourcc_round_trip_every_format() {
    for format in PixelFormat::ALL {
        assert_eq!(PixelFormat::from_fourcc(format.as_fourcc()).unwrap(), format);
    }
}

#[test]
fn test_fourcc_to_string() {
    assert_eq!(fourcc_to_string(PixelFormat::Yu12.as_fourcc()), "YU12");
    assert_eq!(fourcc_to_string(PixelFormat::Nv21.as_fourcc()), "NV21");
}

#[test]
fn test_unknown_fourcc_is_an_error() {
    let fourcc = u32::from_le_bytes(*b"MJPG");
    match PixelFormat::from_fourcc(fourcc) {
        Err(ImageError::UnsupportedFormat(code)) => assert_eq!(code, fourcc),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
    let message = ImageError::UnsupportedFormat(fourcc).to_string();
    assert!(message.contains("MJPG"));
}

#[test]
fn test_parse_from_str() {
    assert_eq!("yu12".parse::<PixelFormat>().unwrap(), PixelFormat::Yu12);
    assert_eq!("I420".parse::<PixelFormat>().unwrap(), PixelFormat::Yu12);
    assert_eq!("422p".parse::<PixelFormat>().unwrap(), PixelFormat::Yuv422p);
    assert_eq!("NV21".parse::<PixelFormat>().unwrap(), PixelFormat::Nv21);
    assert!("YUV".parse::<PixelFormat>().is_err());
    assert!("ABCD".parse::<PixelFormat>().is_err());
}

#[test]
fn test_buffer_len() {
    let size = Vec2::new(4, 4);
    assert_eq!(PixelFormat::Yu12.buffer_len(size).unwrap(), 24);
    assert_eq!(PixelFormat::Yv12.buffer_len(size).unwrap(), 24);
    assert_eq!(PixelFormat::Nv12.buffer_len(size).unwrap(), 24);
    assert_eq!(PixelFormat::Yuv422p.buffer_len(size).unwrap(), 32);
    assert_eq!(PixelFormat::Yuv444p.buffer_len(size).unwrap(), 48);
    assert_eq!(PixelFormat::Rgba8.buffer_len(size).unwrap(), 64);
    // odd sizes round chroma up
    assert_eq!(PixelFormat::Yu12.buffer_len(Vec2::new(3, 3)).unwrap(), 9 + 2 * 4);
}

#[test]
fn test_is_yuv() {
    assert!(PixelFormat::Nv12.is_yuv());
    assert!(!PixelFormat::Rgba8.is_yuv());
    assert!(PixelFormat::Rgba8.chroma_layout().is_none());
}

#[test]
fn test_ensure_format() {
    assert!(PixelFormat::Rgba8.ensure_format(PixelFormat::Rgba8).is_ok());
    assert!(matches!(
        PixelFormat::Yu12.ensure_format(PixelFormat::Rgba8),
        Err(ImageError::Format(_))
    ));
}

#[test]
fn test_buffer_len_overflow_is_an_error() {
    let size = Vec2::new(usize::MAX / 2, 3);
    for format in PixelFormat::ALL {
        assert!(matches!(
            format.buffer_len(size),
            Err(ImageError::SizeOverflow(s)) if s == size
        ));
    }
    // luma fits, chroma planes push it over
    let size = Vec2::new(usize::MAX / 4, 2);
    assert!(PixelFormat::Yuv444p.buffer_len(size).is_err());
    assert!(PixelFormat::Rgba8.buffer_len(size).is_err());
}
