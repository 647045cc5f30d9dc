//! TextSource — turns a resume document on disk into one flattened text stream.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use gag::Redirect;
use tracing::{debug, info, warn};

use crate::errors::ExtractError;

/// Produces the full text of a document. Either the whole document is read
/// or an error is returned; there are no partial results.
pub trait TextSource {
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// PDF-backed text source built on `pdf-extract`.
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        // File handle is closed once `read` returns.
        let bytes = std::fs::read(path).map_err(|e| ExtractError::document_read(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let pages = extract_pages(&bytes).map_err(|reason| ExtractError::document_read(path, reason))?;
        info!("Extracted {} page(s) from {}", pages.len(), path.display());

        Ok(join_pages(pages))
    }
}

/// Runs the PDF parser, converting both parse errors and parser panics into a reason string.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, String> {
    // pdf-extract reports font problems with println!; stdout is reserved for the record.
    let diverted = Redirect::stdout(std::io::stderr())
        .map_err(|e| warn!("Could not divert PDF parser output to stderr: {e}"))
        .ok();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    let _ = std::io::stdout().flush();
    drop(diverted);

    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(format!("not a readable PDF: {e}")),
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown parser failure".to_string());
            Err(format!("PDF parser aborted: {detail}"))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/common/mod.rs"]
mod pdf_fixture;

/// Concatenates pages in document order with a single newline between consecutive pages.
pub fn join_pages(pages: Vec<String>) -> String {
    pages.join("\n")
}
