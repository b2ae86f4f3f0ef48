//! PDF processing layer
//!
//! This module provides PDF processing functionality using PDFium and qpdf.

mod qpdf;
mod reader;

pub use qpdf::PdfCodec;
pub use reader::{extract_images, extract_text, EmbeddedImage};
