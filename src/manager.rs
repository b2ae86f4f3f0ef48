//! Manager layer
//!
//! One operation per use case, each a direct sequence of calls into the
//! codec wrappers plus filesystem writes. Operations run synchronously on
//! the calling thread and open no handle that outlives the call. Failures
//! abort the operation; artifacts already written stay on disk.

use crate::error::{Error, Result};
use crate::pdf::{extract_images, extract_text, PdfCodec};
use crate::session::Session;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Report for a merge operation.
#[derive(Debug, Serialize)]
pub struct MergeReport {
    pub output: PathBuf,
    pub input_count: usize,
    pub page_count: u32,
}

/// Report for a split operation: one entry per output document.
#[derive(Debug, Serialize)]
pub struct SplitReport {
    pub outputs: Vec<SplitPart>,
}

#[derive(Debug, Serialize)]
pub struct SplitPart {
    pub output: PathBuf,
    pub page_count: u32,
}

/// Report for a page-extraction operation.
#[derive(Debug, Serialize)]
pub struct ExtractReport {
    pub output: PathBuf,
    pub page_count: u32,
}

/// Report for a text-extraction operation.
#[derive(Debug, Serialize)]
pub struct TextReport {
    pub output: PathBuf,
    pub chars: usize,
}

/// Report for an image-extraction operation.
#[derive(Debug, Serialize)]
pub struct ImagesReport {
    pub outputs: Vec<PathBuf>,
}

/// Report for protect/unprotect: the new artifact next to the original.
#[derive(Debug, Serialize)]
pub struct PasswordReport {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// PDF operations over the current file selection.
///
/// Holds the [`Session`] for the lifetime of one run of the interface;
/// every operation re-checks its file-count precondition against it.
#[derive(Debug, Default)]
pub struct PdfManager {
    pub session: Session,
}

impl PdfManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// Merge the selected PDF files into a single output file, in
    /// selection order. Requires at least two selected files; nothing is
    /// written on failure.
    pub fn merge(&self, output: &Path) -> Result<MergeReport> {
        let inputs = self.session.require_merge_inputs()?;
        info!(inputs = inputs.len(), output = %output.display(), "merging PDFs");

        let buffers = inputs
            .iter()
            .map(|path| read_pdf(path))
            .collect::<Result<Vec<_>>>()?;
        let slices: Vec<&[u8]> = buffers.iter().map(Vec::as_slice).collect();

        let merged = PdfCodec::merge(&slices)?;
        let page_count = PdfCodec::page_count(&merged, None)?;
        std::fs::write(output, &merged)?;

        Ok(MergeReport {
            output: output.to_path_buf(),
            input_count: inputs.len(),
            page_count,
        })
    }

    /// Split the selected PDF into one output document per page-index set,
    /// written to `output_dir` as `split_0.pdf`, `split_1.pdf`, ...
    pub fn split(&self, output_dir: &Path, groups: &[Vec<u32>]) -> Result<SplitReport> {
        let input = self.session.require_single()?;
        info!(input = %input.display(), parts = groups.len(), "splitting PDF");

        let data = read_pdf(input)?;
        let mut outputs = Vec::with_capacity(groups.len());

        for (idx, indices) in groups.iter().enumerate() {
            let part = PdfCodec::copy_pages(&data, indices, None)?;
            let page_count = PdfCodec::page_count(&part, None)?;
            let output = output_dir.join(format!("split_{}.pdf", idx));
            debug!(output = %output.display(), pages = page_count, "writing split part");
            std::fs::write(&output, &part)?;
            outputs.push(SplitPart { output, page_count });
        }

        Ok(SplitReport { outputs })
    }

    /// Extract the given pages of the selected PDF into a single output
    /// document, in index order.
    pub fn extract_pages(&self, output: &Path, indices: &[u32]) -> Result<ExtractReport> {
        let input = self.session.require_single()?;
        info!(input = %input.display(), output = %output.display(), pages = indices.len(), "extracting pages");

        let data = read_pdf(input)?;
        let extracted = PdfCodec::copy_pages(&data, indices, None)?;
        let page_count = PdfCodec::page_count(&extracted, None)?;
        std::fs::write(output, &extracted)?;

        Ok(ExtractReport {
            output: output.to_path_buf(),
            page_count,
        })
    }

    /// Extract the text of every page, in document order, into one text
    /// file.
    pub fn extract_text(&self, output: &Path) -> Result<TextReport> {
        let input = self.session.require_single()?;
        info!(input = %input.display(), output = %output.display(), "extracting text");

        let data = read_pdf(input)?;
        let text = extract_text(&data, None)?;
        std::fs::write(output, &text)?;

        Ok(TextReport {
            output: output.to_path_buf(),
            chars: text.chars().count(),
        })
    }

    /// Extract every embedded raster image into `output_dir` as
    /// `image_0.jpg`, `image_1.jpg`, ... numbered globally across the
    /// whole document.
    pub fn extract_images(&self, output_dir: &Path) -> Result<ImagesReport> {
        let input = self.session.require_single()?;
        info!(input = %input.display(), dir = %output_dir.display(), "extracting images");

        let data = read_pdf(input)?;
        let images = extract_images(&data, None)?;
        let mut outputs = Vec::with_capacity(images.len());

        for (idx, embedded) in images.into_iter().enumerate() {
            let output = output_dir.join(format!("image_{}.jpg", idx));
            debug!(output = %output.display(), page = embedded.page, "writing image");
            // JPEG has no alpha channel
            embedded
                .image
                .to_rgb8()
                .save_with_format(&output, image::ImageFormat::Jpeg)?;
            outputs.push(output);
        }

        Ok(ImagesReport { outputs })
    }

    /// Copy the selected PDF into a new password-protected document next
    /// to the original (`<stem>_encrypted.pdf`). The original is left
    /// untouched.
    pub fn protect(&self, password: &str) -> Result<PasswordReport> {
        let input = self.session.require_single()?;
        let output = sibling_with_suffix(input, "_encrypted");
        info!(input = %input.display(), output = %output.display(), "protecting PDF");

        let data = read_pdf(input)?;
        let encrypted = PdfCodec::encrypt(&data, password, None)?;
        std::fs::write(&output, &encrypted)?;

        Ok(PasswordReport {
            input: input.to_path_buf(),
            output,
        })
    }

    /// Decrypt the selected PDF into a new document next to the original
    /// (`<stem>_decrypted.pdf`). The original is left untouched.
    pub fn unprotect(&self, password: &str) -> Result<PasswordReport> {
        let input = self.session.require_single()?;
        let output = sibling_with_suffix(input, "_decrypted");
        info!(input = %input.display(), output = %output.display(), "removing PDF password");

        let data = read_pdf(input)?;
        let decrypted = PdfCodec::decrypt(&data, password)?;
        std::fs::write(&output, &decrypted)?;

        Ok(PasswordReport {
            input: input.to_path_buf(),
            output,
        })
    }
}

/// Read a source PDF into memory, mapping a missing file to a dedicated
/// error instead of a bare IO error.
fn read_pdf(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(std::fs::read(path)?)
}

/// Build `<stem><suffix>.pdf` next to `path`.
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}.pdf", stem, suffix))
}
