//! File-level conversion: decode a PNG, pack it, write the header.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use image::{ColorType, ImageFormat};
use log::{debug, info};

use crate::binarize::binarize_rgba;
use crate::config::ConvertOptions;
use crate::error::{ConvertError, PackError};
use crate::grid::PixelGrid;
use crate::header::{render_header, validate_symbol, HeaderOptions};
use crate::pack::pack;

/// What the decoder reported about the input before any reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    /// Colour mode name, e.g. `RGBA` or `L`.
    pub color: String,
}

/// Outcome of a successful [`convert`] run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub source: SourceInfo,
    pub width: u32,
    pub height: u32,
    pub byte_count: usize,
    pub output: PathBuf,
    pub header: String,
}

/// Decode the PNG at `path` and reduce it to a 1-bit grid.
pub fn load_grid(path: &Path) -> Result<(SourceInfo, PixelGrid), ConvertError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound(path.to_path_buf()),
        _ => ConvertError::DecodeFailure {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let img = image::load(BufReader::new(file), ImageFormat::Png).map_err(|e| {
        ConvertError::DecodeFailure {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let source = SourceInfo {
        width: img.width(),
        height: img.height(),
        color: color_name(img.color()).to_string(),
    };
    debug!(
        "decoded {}: {}x{} {}",
        path.display(),
        source.width,
        source.height,
        source.color
    );

    if source.width == 0 || source.height == 0 {
        return Err(ConvertError::InvalidDimensions {
            width: source.width,
            height: source.height,
        });
    }

    let rgba = img.into_rgba8();
    let grid = binarize_rgba(source.width, source.height, rgba.as_raw())
        .map_err(|e| pack_error(path, e))?;

    Ok((source, grid))
}

/// Run the whole conversion described by `opts`.
///
/// The output file is only touched once the header text is complete.
pub fn convert(opts: &ConvertOptions) -> Result<ConversionReport, ConvertError> {
    validate_symbol(&opts.symbol)?;

    let (source, grid) = load_grid(&opts.input)?;
    let bitmap = pack(&grid);
    info!(
        "packed {}x{} into {} pages, {} bytes",
        bitmap.width(),
        bitmap.height(),
        bitmap.pages(),
        bitmap.len()
    );

    let header_opts = HeaderOptions {
        symbol: opts.symbol.clone(),
        source_name: opts
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
    };
    let header = render_header(&bitmap, &header_opts)?;

    write_atomic(&opts.output, header.as_bytes())?;
    info!("wrote {}", opts.output.display());

    Ok(ConversionReport {
        source,
        width: bitmap.width(),
        height: bitmap.height(),
        byte_count: bitmap.len(),
        output: opts.output.clone(),
        header,
    })
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// Parent directories are created as needed. On failure the temp file is
/// removed and `path` is left as it was.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_failure(path, e))?;
    }

    let tmp = temp_path(path);
    debug!("writing {} via {}", path.display(), tmp.display());
    if let Err(e) = write_then_rename(&tmp, path, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(write_failure(path, e));
    }
    Ok(())
}

fn write_then_rename(tmp: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    {
        let mut file = File::create(tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename(tmp, path)
}

/// Hidden sibling of `path` tagged with the process id: `.<name>.<pid>.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn write_failure(path: &Path, source: io::Error) -> ConvertError {
    ConvertError::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

fn pack_error(path: &Path, err: PackError) -> ConvertError {
    match &err {
        PackError::InvalidDimensions { width, height } => ConvertError::InvalidDimensions {
            width: *width,
            height: *height,
        },
        PackError::SampleCountMismatch { .. } => ConvertError::DecodeFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    }
}

fn color_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L16",
        ColorType::La16 => "LA16",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "unknown",
    }
}
