//! pdfman library
//!
//! PDF utility operations behind a thin CLI:
//! - `merge`: concatenate PDFs in selection order
//! - `split` / `extract_pages`: copy page selections into new documents
//! - `extract_text` / `extract_images`: pull page text and embedded images
//! - `protect` / `unprotect`: add or remove an open password
//!
//! The codec work is delegated to qpdf and PDFium; this crate parses page
//! ranges, tracks the file selection, and wires the two together.

pub mod cli;
pub mod error;
pub mod manager;
pub mod pages;
pub mod pdf;
pub mod session;

pub use error::{Error, Result};
pub use manager::PdfManager;
pub use session::Session;
