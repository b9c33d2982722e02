use bytes::Bytes;
use tracing::{debug, warn};

use super::ExtractionError;

/// Guards the upload before any parsing: the file must carry a `.pdf` name.
pub fn ensure_pdf_filename(file_name: Option<&str>) -> Result<(), ExtractionError> {
    match file_name {
        Some(name) if name.to_lowercase().ends_with(".pdf") => Ok(()),
        _ => Err(ExtractionError::NotPdf),
    }
}

/// Extracts the concatenated text of every page of a PDF.
///
/// Parsing is CPU-bound and runs on the blocking pool. A parser failure and a
/// parser panic both surface as `ExtractionError::Unparseable`.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, ExtractionError> {
    let size = data.len();
    let outcome = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;

    match outcome {
        Ok(Ok(text)) => {
            debug!(bytes = size, chars = text.len(), "PDF text extracted");
            Ok(text)
        }
        Ok(Err(e)) => {
            warn!("PDF parse failed: {e}");
            Err(ExtractionError::Unparseable(e.to_string()))
        }
        Err(e) => {
            warn!("PDF parser aborted: {e}");
            Err(ExtractionError::Unparseable(
                "the file is not a readable PDF".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_filename_accepted_case_insensitively() {
        assert!(ensure_pdf_filename(Some("resume.pdf")).is_ok());
        assert!(ensure_pdf_filename(Some("RESUME.PDF")).is_ok());
    }

    #[test]
    fn test_non_pdf_filename_rejected() {
        assert!(matches!(
            ensure_pdf_filename(Some("resume.docx")),
            Err(ExtractionError::NotPdf)
        ));
        assert!(matches!(ensure_pdf_filename(None), Err(ExtractionError::NotPdf)));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_an_extraction_error() {
        let result = extract_pdf_text(Bytes::from_static(b"this is not a pdf")).await;
        assert!(matches!(result, Err(ExtractionError::Unparseable(_))));
    }
}
