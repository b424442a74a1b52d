//! Image persistence: write each rasterised page and build the manifest.
//!
//! Unlike rasterisation, this stage tolerates failure per page. A page that
//! cannot be written is logged, recorded as a [`PageError`], and left out of
//! the manifest; the next page is attempted as normal.

use crate::error::PageError;
use crate::output::{ManifestEntry, PageResult};
use crate::pipeline::encode::PageWriter;
use crate::pipeline::layout::OutputLayout;
use crate::progress::ProgressCallback;
use image::DynamicImage;
use tracing::{info, warn};

/// Manifest and per-page results produced by [`persist_pages`].
#[derive(Debug, Default)]
pub struct Persisted {
    pub manifest: Vec<ManifestEntry>,
    pub pages: Vec<PageResult>,
}

/// Write `images` as `page_1.jpg`, `page_2.jpg`, … into the layout's image
/// directory. Each image is dropped as soon as it has been attempted.
pub fn persist_pages(
    images: Vec<DynamicImage>,
    layout: &OutputLayout,
    writer: &dyn PageWriter,
    progress: Option<&ProgressCallback>,
) -> Persisted {
    let total = images.len();
    let mut out = Persisted {
        manifest: Vec::with_capacity(total),
        pages: Vec::with_capacity(total),
    };

    for (idx, image) in images.into_iter().enumerate() {
        let page_num = idx + 1;
        let path = layout.image_path(page_num);

        match writer.write_page(&image, &path) {
            Ok(()) => {
                info!("Saved image: {}", path.display());
                if let Some(cb) = progress {
                    cb.on_page_saved(page_num, total, &path);
                }
                out.manifest.push(ManifestEntry {
                    page_num,
                    path: path.clone(),
                    href: layout.image_href(page_num),
                });
                out.pages.push(PageResult {
                    page_num,
                    path,
                    error: None,
                });
            }
            Err(e) => {
                let error = PageError::SaveFailed {
                    page: page_num,
                    path: path.clone(),
                    detail: e.to_string(),
                };
                warn!("Error saving image {}: {}", path.display(), e);
                if let Some(cb) = progress {
                    cb.on_page_error(page_num, total, &error.to_string());
                }
                out.pages.push(PageResult {
                    page_num,
                    path,
                    error: Some(error),
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageError, RgbImage};
    use std::path::Path;
    use tempfile::TempDir;

    /// Writes nothing; fails for the listed pages.
    struct FlakyWriter {
        fail_on: Vec<usize>,
    }

    impl PageWriter for FlakyWriter {
        fn write_page(&self, _image: &DynamicImage, path: &Path) -> Result<(), ImageError> {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            let failing = self
                .fail_on
                .iter()
                .any(|p| name == OutputLayout::image_file_name(*p));
            if failing {
                Err(ImageError::IoError(std::io::Error::other("simulated write error")))
            } else {
                Ok(())
            }
        }
    }

    fn pages(n: usize) -> Vec<DynamicImage> {
        (0..n)
            .map(|_| DynamicImage::ImageRgb8(RgbImage::new(4, 4)))
            .collect()
    }

    #[test]
    fn all_pages_saved_in_order() {
        let layout = OutputLayout::new("webpage", "src", "output.html");
        let writer = FlakyWriter { fail_on: vec![] };

        let out = persist_pages(pages(3), &layout, &writer, None);

        let hrefs: Vec<&str> = out.manifest.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, ["src/page_1.jpg", "src/page_2.jpg", "src/page_3.jpg"]);
        assert!(out.pages.iter().all(PageResult::is_saved));
    }

    #[test]
    fn failed_page_is_left_out_of_manifest() {
        let layout = OutputLayout::new("webpage", "src", "output.html");
        let writer = FlakyWriter { fail_on: vec![3] };

        let out = persist_pages(pages(5), &layout, &writer, None);

        let saved: Vec<usize> = out.manifest.iter().map(|e| e.page_num).collect();
        assert_eq!(saved, vec![1, 2, 4, 5]);
        assert_eq!(out.pages.len(), 5);
        assert_eq!(out.pages[2].error.as_ref().map(PageError::page), Some(3));
    }

    #[test]
    fn empty_document_yields_empty_manifest() {
        let layout = OutputLayout::new("webpage", "src", "output.html");
        let out = persist_pages(vec![], &layout, &FlakyWriter { fail_on: vec![] }, None);
        assert!(out.manifest.is_empty());
        assert!(out.pages.is_empty());
    }

    #[test]
    fn real_writer_puts_files_in_image_dir() {
        let tmp = TempDir::new().unwrap();
        let layout = OutputLayout::new(tmp.path(), "src", "output.html");
        layout.prepare().unwrap();

        let out = persist_pages(pages(2), &layout, &crate::pipeline::encode::JpegFileWriter, None);

        assert_eq!(out.manifest.len(), 2);
        assert!(tmp.path().join("src/page_1.jpg").is_file());
        assert!(tmp.path().join("src/page_2.jpg").is_file());
    }
}
