//! PDF reader wrapper for PDFium
//!
//! Text and embedded-image extraction. PDFium owns the content-stream
//! heavy lifting; this module just walks pages in document order and hands
//! the results to the manager layer.

use crate::error::{Error, Result};
use image::DynamicImage;
use pdfium_render::prelude::*;

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

fn map_pdfium_error(e: PdfiumError) -> Error {
    match e {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::PasswordRequired
        }
        _ => Error::Pdfium {
            reason: format!("{}", e),
        },
    }
}

fn check_pdf_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(())
}

/// A raster image found while traversing a document's pages.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    /// Page number the image appeared on (1-indexed)
    pub page: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Decoded pixel data
    pub image: DynamicImage,
}

/// Extract the text of every page, in document order, concatenated into a
/// single string. Pages without extractable text contribute nothing.
pub fn extract_text(data: &[u8], password: Option<&str>) -> Result<String> {
    check_pdf_header(data)?;

    let pdfium = create_pdfium()?;
    let document = pdfium
        .load_pdf_from_byte_slice(data, password)
        .map_err(map_pdfium_error)?;

    let mut text = String::new();
    let pages = document.pages();

    for page_index in 0..pages.len() {
        let page = pages.get(page_index).map_err(|e| Error::Pdfium {
            reason: format!("Failed to get page {}: {}", page_index + 1, e),
        })?;

        if let Ok(page_text) = page.text() {
            text.push_str(&page_text.all());
        };
    }

    Ok(text)
}

/// Extract every embedded raster image, traversing pages in order.
///
/// Image objects PDFium cannot render to a bitmap are skipped rather than
/// failing the whole extraction.
pub fn extract_images(data: &[u8], password: Option<&str>) -> Result<Vec<EmbeddedImage>> {
    check_pdf_header(data)?;

    let pdfium = create_pdfium()?;
    let document = pdfium
        .load_pdf_from_byte_slice(data, password)
        .map_err(map_pdfium_error)?;

    let mut images = Vec::new();
    let pages = document.pages();

    for page_index in 0..pages.len() {
        let page = pages.get(page_index).map_err(|e| Error::Pdfium {
            reason: format!("Failed to get page {}: {}", page_index + 1, e),
        })?;

        for object in page.objects().iter() {
            if let Some(image_object) = object.as_image_object() {
                if let Ok(dynamic_image) = image_object.get_processed_image(&document) {
                    images.push(EmbeddedImage {
                        page: page_index as u32 + 1,
                        width: dynamic_image.width(),
                        height: dynamic_image.height(),
                        image: dynamic_image,
                    });
                }
            }
        }
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_detection() {
        let result = extract_text(b"not a pdf", None);
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }

    #[test]
    fn test_invalid_pdf_detection_images() {
        let result = extract_images(b"not a pdf", None);
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }

    #[test]
    fn test_truncated_header() {
        assert!(extract_text(b"%PD", None).is_err());
    }
}
