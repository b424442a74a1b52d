//! PDF rasterisation: render every page to a `DynamicImage` via pdfium.
//!
//! The stage is all-or-nothing. If the document cannot be opened or any page
//! fails to render, no images are returned and the run stops before a single
//! file is written.
//!
//! pdfium lays pages out in PDF points (1/72 inch), so a target resolution
//! of `dpi` is a uniform scale factor of `dpi / 72`.

use crate::config::ConversionConfig;
use crate::error::Pdf2HtmlError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// PDF points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Turns a document into one image per page, in page order.
///
/// The pipeline treats implementations as opaque: it only relies on the
/// ordering and on failure being reported for the document as a whole.
pub trait Rasterizer {
    fn rasterize(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, Pdf2HtmlError>;
}

/// Production rasteriser backed by the pdfium library.
#[derive(Debug, Clone)]
pub struct PdfiumRasterizer {
    library_dirs: Vec<PathBuf>,
}

impl PdfiumRasterizer {
    /// Search `library_dirs` for pdfium, then the system loader.
    pub fn new(library_dirs: Vec<PathBuf>) -> Self {
        Self { library_dirs }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(config.pdfium_library_dirs.clone())
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, Pdf2HtmlError> {
        let pdfium = bind_pdfium(&self.library_dirs)?;
        render_document(&pdfium, pdf_path, dpi)
    }
}

/// Bind to the first pdfium library found in `dirs`, else the system one.
pub fn bind_pdfium(dirs: &[PathBuf]) -> Result<Pdfium, Pdf2HtmlError> {
    let mut last_error = None;

    for dir in dirs {
        let candidate = Pdfium::pdfium_platform_library_name_at_path(dir);
        match Pdfium::bind_to_library(&candidate) {
            Ok(bindings) => {
                debug!("Bound pdfium from {}", candidate.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => {
                debug!("No pdfium at {}: {:?}", candidate.display(), e);
                last_error = Some(e);
            }
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| {
            let detail = match last_error {
                Some(prev) => format!("{:?} (last search-path error: {:?})", e, prev),
                None => format!("{:?}", e),
            };
            Pdf2HtmlError::PdfiumBindingFailed(detail)
        })
}

/// Scale factor pdfium needs to render at `dpi`.
pub fn scale_for_dpi(dpi: u32) -> f32 {
    dpi as f32 / POINTS_PER_INCH
}

/// Render every page of `pdf_path` at `dpi`.
pub fn render_document(
    pdfium: &Pdfium,
    pdf_path: &Path,
    dpi: u32,
) -> Result<Vec<DynamicImage>, Pdf2HtmlError> {
    let document = open_document(pdfium, pdf_path)?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    let render_config = PdfRenderConfig::new().scale_page_by_factor(scale_for_dpi(dpi));

    let mut images = Vec::with_capacity(total_pages);
    for (idx, page) in pages.iter().enumerate() {
        let bitmap = page.render_with_config(&render_config).map_err(|e| {
            Pdf2HtmlError::RasterisationFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            }
        })?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} → {}x{} px",
            idx + 1,
            image.width(),
            image.height()
        );
        images.push(image);
    }

    Ok(images)
}

/// Count pages without rendering anything.
pub fn page_count(pdfium: &Pdfium, pdf_path: &Path) -> Result<usize, Pdf2HtmlError> {
    let document = open_document(pdfium, pdf_path)?;
    Ok(document.pages().len() as usize)
}

fn open_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
) -> Result<PdfDocument<'a>, Pdf2HtmlError> {
    pdfium.load_pdf_from_file(pdf_path, None).map_err(|e| {
        // Existence is only consulted to word the error; the load attempt
        // itself is the check.
        if pdf_path.exists() {
            Pdf2HtmlError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: format!("{:?}", e),
            }
        } else {
            Pdf2HtmlError::DocumentNotFound {
                path: pdf_path.to_path_buf(),
            }
        }
    })
}
