//! Conversion helpers between encoded image files and the in-memory RGB grid.
//!
//! All arithmetic happens on [`RgbImage`], a contiguous buffer of `width * height * 3` bytes.
//! Encoded formats (PNG, JPEG) only exist at this boundary.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{imageops, DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder, ImageReader};
pub use image::RgbImage;
use log::{debug, error};

use crate::error::PixveilError;
use crate::result::Result;

/// Crops both images to their smallest common width and height, anchored at the top-left corner.
///
/// No scaling and no centering happens. A degenerate result (zero width or height)
/// is returned as is, it is up to the caller to reject it.
pub fn crop_to_common_size(a: &RgbImage, b: &RgbImage) -> (RgbImage, RgbImage) {
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());
    debug!(
        "cropping {}x{} and {}x{} to {width}x{height}",
        a.width(),
        a.height(),
        b.width(),
        b.height()
    );

    (
        imageops::crop_imm(a, 0, 0, width, height).to_image(),
        imageops::crop_imm(b, 0, 0, width, height).to_image(),
    )
}

/// Decodes an image from raw bytes into the 3 channel 8 bit grid.
///
/// The format is guessed from the content. Embedded EXIF orientation is applied,
/// so the grid matches what a viewer would show. Alpha channels and other color
/// depths are normalized away.
pub fn load_image(bytes: &[u8]) -> Result<RgbImage> {
    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PixveilError::DecodeFailure(image::ImageError::IoError(e)))?
        .into_decoder()
        .map_err(PixveilError::DecodeFailure)?;
    let orientation = decoder.orientation().map_err(PixveilError::DecodeFailure)?;
    let mut img = DynamicImage::from_decoder(decoder).map_err(PixveilError::DecodeFailure)?;
    img.apply_orientation(orientation);

    Ok(img.into_rgb8())
}

pub fn load_image_file(path: &Path) -> Result<RgbImage> {
    let bytes = std::fs::read(path).map_err(|source| {
        error!("Error reading image {path:?}: {source}");
        PixveilError::ReadError { source }
    })?;

    load_image(&bytes)
}

/// Encodes the grid as PNG, the low bits survive only in a lossless format.
pub fn save_image<W: Write>(img: &RgbImage, writer: W) -> Result<()> {
    PngEncoder::new(writer)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(|e| {
            error!("Error saving image: {e}");
            PixveilError::ImageEncodingError(e)
        })
}

pub fn save_image_file(img: &RgbImage, path: &Path) -> Result<()> {
    if !is_png_extension(path) {
        return Err(PixveilError::UnsupportedOutputFormat(path.to_path_buf()));
    }

    let f = File::create(path).map_err(|source| {
        error!("Error creating file {path:?}: {source}");
        PixveilError::WriteError { source }
    })?;
    let mut writer = BufWriter::new(f);
    save_image(img, &mut writer)?;

    writer
        .flush()
        .map_err(|source| PixveilError::WriteError { source })
}

pub(crate) fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
