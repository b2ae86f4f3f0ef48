//! qpdf FFI wrapper for PDF document manipulation
//!
//! Page copying, merging, encryption and decryption via the qpdf crate
//! (vendored FFI). All functions operate on in-memory byte buffers; the
//! manager layer owns file IO. Page selection is by 0-based index, as
//! produced by [`crate::pages`].

use crate::error::{Error, Result};
use qpdf::{EncryptionParams, EncryptionParamsR6, PrintPermission, QPdf};

/// Wrapper for qpdf operations via FFI
pub struct PdfCodec;

/// Helper: open a QPdf from memory, optionally with password
fn open_qpdf(data: &[u8], password: Option<&str>) -> Result<QPdf> {
    match password {
        Some(pwd) => QPdf::read_from_memory_encrypted(data, pwd).map_err(map_qpdf_error),
        None => QPdf::read_from_memory(data).map_err(map_qpdf_error),
    }
}

/// Map qpdf crate errors to our error types
fn map_qpdf_error(e: qpdf::QPdfError) -> Error {
    match e.error_code() {
        qpdf::QPdfErrorCode::InvalidPassword => Error::IncorrectPassword,
        _ => Error::QpdfError {
            reason: e.to_string(),
        },
    }
}

impl PdfCodec {
    /// Copy the given pages of a PDF into a new document, in the order
    /// the indices appear. Duplicated indices duplicate the page.
    ///
    /// Out-of-range indices fail with [`Error::PageOutOfBounds`]; nothing
    /// is validated ahead of that.
    pub fn copy_pages(
        input_data: &[u8],
        indices: &[u32],
        password: Option<&str>,
    ) -> Result<Vec<u8>> {
        let source = open_qpdf(input_data, password)?;
        let num_pages = source.get_num_pages().map_err(map_qpdf_error)?;

        let dest = QPdf::empty();

        for &idx in indices {
            let page = source.get_page(idx).ok_or(Error::PageOutOfBounds {
                page: idx + 1,
                total: num_pages,
            })?;
            let copied = dest.copy_from_foreign(&page);
            dest.add_page(&copied, false).map_err(map_qpdf_error)?;
        }

        let mut writer = dest.writer();
        writer.preserve_encryption(false);
        writer.write_to_memory().map_err(map_qpdf_error)
    }

    /// Concatenate the pages of several PDFs into one document, in input
    /// order.
    pub fn merge(inputs: &[&[u8]]) -> Result<Vec<u8>> {
        if inputs.is_empty() {
            return Err(Error::QpdfError {
                reason: "No input PDFs provided".to_string(),
            });
        }

        let dest = QPdf::empty();

        for (i, input_data) in inputs.iter().enumerate() {
            let source = QPdf::read_from_memory(input_data).map_err(|e| Error::QpdfError {
                reason: format!("Failed to read input PDF {}: {}", i, e),
            })?;

            let pages = source.get_pages().map_err(|e| Error::QpdfError {
                reason: format!("Failed to get pages from input PDF {}: {}", i, e),
            })?;

            for page in &pages {
                let copied = dest.copy_from_foreign(page);
                dest.add_page(&copied, false).map_err(map_qpdf_error)?;
            }
        }

        dest.writer().write_to_memory().map_err(map_qpdf_error)
    }

    /// Encrypt a PDF with a password.
    ///
    /// The same password is used as user and owner password and all usage
    /// permissions stay enabled; the protection is purely an open password.
    /// `source_password` unlocks an input that is already encrypted.
    pub fn encrypt(
        input_data: &[u8],
        password: &str,
        source_password: Option<&str>,
    ) -> Result<Vec<u8>> {
        let qpdf = open_qpdf(input_data, source_password)?;

        let encryption = EncryptionParams::R6(EncryptionParamsR6 {
            user_password: password.to_string(),
            owner_password: password.to_string(),
            allow_accessibility: true,
            allow_extract: true,
            allow_assemble: true,
            allow_annotate_and_form: true,
            allow_form_filling: true,
            allow_modify_other: true,
            allow_print: PrintPermission::Full,
            encrypt_metadata: true,
        });

        let mut writer = qpdf.writer();
        writer
            .preserve_encryption(false)
            .encryption_params(encryption);
        writer.write_to_memory().map_err(map_qpdf_error)
    }

    /// Decrypt a PDF (remove password protection).
    pub fn decrypt(input_data: &[u8], password: &str) -> Result<Vec<u8>> {
        let qpdf =
            QPdf::read_from_memory_encrypted(input_data, password).map_err(map_qpdf_error)?;

        let mut writer = qpdf.writer();
        writer.preserve_encryption(false);
        writer.write_to_memory().map_err(map_qpdf_error)
    }

    /// Get the page count of a PDF.
    pub fn page_count(input_data: &[u8], password: Option<&str>) -> Result<u32> {
        let qpdf = open_qpdf(input_data, password)?;
        qpdf.get_num_pages().map_err(map_qpdf_error)
    }
}
