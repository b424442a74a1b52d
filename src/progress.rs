//! Progress-callback trait for per-page persistence events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to observe
//! the run as each page image is written. Events fire synchronously on the
//! calling thread, in page order.
//!
//! # Example
//!
//! ```rust
//! use pdf2html::{ConversionProgressCallback, ConversionConfig};
//! use std::path::Path;
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     saved: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_saved(&self, page_num: usize, total_pages: usize, path: &Path) {
//!         self.saved.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("Page {}/{} → {}", page_num, total_pages, path.display());
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { saved: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::path::Path;
use std::sync::Arc;

/// Called by the pipeline as it persists each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after rasterisation succeeded, before any image is written.
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called after a page image was written to disk.
    ///
    /// # Arguments
    /// * `page_num`    — 1-indexed page number
    /// * `total_pages` — pages produced by rasterisation
    /// * `path`        — file the image was written to
    fn on_page_saved(&self, page_num: usize, total_pages: usize, path: &Path) {
        let _ = (page_num, total_pages, path);
    }

    /// Called when a page image could not be written. The run continues.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once after every page has been attempted.
    ///
    /// # Arguments
    /// * `total_pages` — pages produced by rasterisation
    /// * `saved_count` — pages that made it into the manifest
    fn on_conversion_complete(&self, total_pages: usize, saved_count: usize) {
        let _ = (total_pages, saved_count);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TrackingCallback {
        saved: AtomicUsize,
        errors: AtomicUsize,
        started_total: AtomicUsize,
        completed_saved: AtomicUsize,
    }

    impl ConversionProgressCallback for TrackingCallback {
        fn on_conversion_start(&self, total_pages: usize) {
            self.started_total.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_saved(&self, _page_num: usize, _total_pages: usize, _path: &Path) {
            self.saved.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_error(&self, _page_num: usize, _total_pages: usize, _error: &str) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }

        fn on_conversion_complete(&self, _total_pages: usize, saved_count: usize) {
            self.completed_saved.store(saved_count, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_conversion_start(5);
        cb.on_page_saved(1, 5, Path::new("webpage/src/page_1.jpg"));
        cb.on_page_error(2, 5, "some error");
        cb.on_conversion_complete(5, 4);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();

        tracker.on_conversion_start(3);
        assert_eq!(tracker.started_total.load(Ordering::SeqCst), 3);

        tracker.on_page_saved(1, 3, Path::new("page_1.jpg"));
        tracker.on_page_saved(2, 3, Path::new("page_2.jpg"));
        tracker.on_page_error(3, 3, "disk full");

        assert_eq!(tracker.saved.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);

        tracker.on_conversion_complete(3, 2);
        assert_eq!(tracker.completed_saved.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn arc_dyn_callback_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConversionProgressCallback>();

        let cb: ProgressCallback = Arc::new(NoopProgressCallback);
        cb.on_conversion_start(10);
    }
}
