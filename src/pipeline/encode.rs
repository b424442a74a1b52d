//! Image encoding: `DynamicImage` → JPEG file.
//!
//! pdfium hands back RGBA bitmaps, and baseline JPEG has no alpha channel,
//! so every page is flattened to RGB before encoding. Quality is fixed at
//! 75, the common default of JPEG tooling.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// JPEG quality used for every page.
pub const JPEG_QUALITY: u8 = 75;

/// Serialises one page image to a file.
///
/// Called once per page; a failure only affects that page.
pub trait PageWriter {
    fn write_page(&self, image: &DynamicImage, path: &Path) -> Result<(), ImageError>;
}

/// Production writer: JPEG via the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegFileWriter;

impl PageWriter for JpegFileWriter {
    fn write_page(&self, image: &DynamicImage, path: &Path) -> Result<(), ImageError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        encode_jpeg(image, &mut writer)?;
        writer.flush()?;
        debug!("Encoded {}x{} px → {}", image.width(), image.height(), path.display());
        Ok(())
    }
}

/// Encode `image` as JPEG into `writer`.
pub fn encode_jpeg<W: Write>(image: &DynamicImage, writer: &mut W) -> Result<(), ImageError> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, JPEG_QUALITY))
}
