//! Error types for pdfman

use thiserror::Error;

/// Result type alias for pdfman
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pdfman
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF is password protected and no password was provided
    #[error("PDF is password protected")]
    PasswordRequired,

    /// Incorrect password provided
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Invalid page range
    #[error("Invalid page range: {range}")]
    InvalidPageRange { range: String },

    /// Page out of bounds
    #[error("Page {page} out of bounds (total: {total})")]
    PageOutOfBounds { page: u32, total: u32 },

    /// Merge requires at least two selected files
    #[error("At least two PDF files are required to merge (selected: {selected})")]
    NotEnoughFiles { selected: usize },

    /// Operation requires exactly one selected file
    #[error("Exactly one PDF file must be selected (selected: {selected})")]
    SingleFileRequired { selected: usize },

    /// Selection index out of range
    #[error("No selected file at position {index} (selected: {selected})")]
    SelectionOutOfRange { index: usize, selected: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Image encoding error
    #[error("Image encoding error: {0}")]
    ImageEncoding(#[from] image::ImageError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// qpdf error
    #[error("qpdf error: {reason}")]
    QpdfError { reason: String },
}
