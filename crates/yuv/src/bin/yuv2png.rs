use {
    anyhow::{Context, Result, bail},
    base::{Vec2, init_file_logger, init_stdout_logger},
    std::path::{Path, PathBuf},
    yuv::*,
};

const USAGE: &str = "usage: yuv2png [--log-dir <dir>] <input.yuv> <width> <height> <fourcc> <output.png|.jpg> [bt601|bt709] [full|video]";
const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Png,
    Jpeg,
}

impl Encoding {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Encoding::Png),
            Some("jpg") | Some("jpeg") => Ok(Encoding::Jpeg),
            _ => bail!("output must end in .png, .jpg or .jpeg"),
        }
    }
}

#[derive(Debug)]
struct Args {
    input: PathBuf,
    size: Vec2<usize>,
    format: PixelFormat,
    output: PathBuf,
    encoding: Encoding,
    config: ConvertConfig,
    log_dir: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut log_dir = None;
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--log-dir" {
            let dir = iter.next().context("--log-dir needs a directory")?;
            log_dir = Some(PathBuf::from(dir));
        } else {
            positional.push(arg.as_str());
        }
    }
    if positional.len() < 5 || positional.len() > 7 {
        bail!(USAGE);
    }

    let width: usize = positional[1]
        .parse()
        .with_context(|| format!("bad width {:?}", positional[1]))?;
    let height: usize = positional[2]
        .parse()
        .with_context(|| format!("bad height {:?}", positional[2]))?;
    let format: PixelFormat = positional[3].parse()?;
    if !format.is_yuv() {
        bail!("{:?} is not a YUV input format", format);
    }
    let output = PathBuf::from(positional[4]);
    let encoding = Encoding::from_path(&output)?;

    let mut config = ConvertConfig::default();
    if let Some(matrix) = positional.get(5) {
        config = config.with_matrix(matrix.parse()?);
    }
    if let Some(range) = positional.get(6) {
        config = config.with_range(range.parse()?);
    }

    Ok(Args {
        input: PathBuf::from(positional[0]),
        size: Vec2::new(width, height),
        format,
        output,
        encoding,
        config,
        log_dir,
    })
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw)?;

    match &args.log_dir {
        Some(dir) => init_file_logger(dir)
            .with_context(|| format!("opening log directory {}", dir.display()))?,
        None => init_stdout_logger(),
    }

    let data = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let image = Image::with_checked_len(args.size, data, args.format)?;
    log::info!(
        "{}: {} {:?}, {:?} {:?}",
        args.input.display(),
        args.size,
        args.format,
        args.config.matrix(),
        args.config.range()
    );

    let rgba = Converter::new(&args.config)?.convert_image(&image)?;

    let encoded = match args.encoding {
        Encoding::Png => rgba_to_png(&rgba)?,
        Encoding::Jpeg => rgba_to_jpeg(&rgba, JPEG_QUALITY)?,
    };
    std::fs::write(&args.output, &encoded)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {} ({} bytes)", args.output.display(), encoded.len());

    Ok(())
}
