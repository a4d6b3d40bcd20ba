/// Crosshair icon generator
///
/// Renders the literal crosshair table into an RGBA canvas, encodes it as PNG
/// and writes it to disk. The pipeline is linear: render -> encode -> write.
/// Parent directories are never created; a missing directory is an error.
use image::codecs::png::PngEncoder;
use image::{ColorType, GenericImageView, ImageEncoder, ImageError, ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, ICON_SIZE};
use crate::error::{IconError, Result};
use crate::pattern;

/// Build the 9x9 canvas from the crosshair table
pub fn render() -> RgbaImage {
    let canvas = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, pattern::pixel_at);
    tracing::debug!("Rendered {}x{} crosshair canvas", ICON_SIZE, ICON_SIZE);
    canvas
}

/// Encode a canvas as PNG with the encoder's default compression and filter
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let (width, height) = canvas.dimensions();

    PngEncoder::new(&mut bytes)
        .write_image(canvas.as_raw(), width, height, ColorType::Rgba8)
        .map_err(IconError::Encode)?;

    tracing::debug!("Encoded crosshair PNG ({} bytes)", bytes.len());
    Ok(bytes)
}

/// Render, encode and write the icon to `path`, overwriting any existing file
pub fn generate_to(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let bytes = encode_png(&render())?;

    fs::write(path, &bytes).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Wrote crosshair icon to {}", path.display());
    Ok(path.to_path_buf())
}

/// Write the icon to the fixed output path
pub fn generate() -> Result<PathBuf> {
    generate_to(config::output_path())
}

/// Decode a written icon and check it is a 9x9 PNG with an alpha channel
pub fn verify_icon(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let read_err = |source: ImageError| IconError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = image::io::Reader::open(path)
        .map_err(|e| read_err(ImageError::IoError(e)))?;
    reader.set_format(ImageFormat::Png);

    let image = reader.decode().map_err(read_err)?;

    let (width, height) = image.dimensions();
    if width != ICON_SIZE || height != ICON_SIZE {
        return Err(IconError::Dimensions {
            width,
            height,
            expected: ICON_SIZE,
        });
    }

    if !image.color().has_alpha() {
        return Err(IconError::MissingAlpha(image.color()));
    }

    Ok(image.into_rgba8())
}
