//! Pipeline stages for PDF-to-HTML conversion.
//!
//! Each submodule implements exactly one step. The collaborators that touch
//! external libraries ([`render::Rasterizer`], [`encode::PageWriter`]) are
//! traits so the other stages can be exercised without pdfium.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ layout ──▶ render ──▶ persist ──▶ html
//! (args)    (mkdir)    (pdfium)   (jpeg)      (output.html)
//! ```
//!
//! 1. [`input`]   — map positional arguments onto defaults
//! 2. [`layout`]  — create the output and image directories
//! 3. [`render`]  — rasterise every page; fatal on any failure
//! 4. [`persist`] — write `page_<n>.jpg` files via [`encode`]; per-page failures
//!    are skipped
//! 5. [`html`]    — assemble and write `output.html` from the manifest

pub mod encode;
pub mod html;
pub mod input;
pub mod layout;
pub mod persist;
pub mod render;
