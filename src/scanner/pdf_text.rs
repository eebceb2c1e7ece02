//! PDFテキスト抽出
//!
//! lopdfで読み込み、ページ順にテキストを抽出して連結する

use crate::error::{ReviewAiError, Result};
use lopdf::Document;
use std::path::Path;

pub fn extract_text(path: &Path) -> Result<String> {
    let to_error = |e: lopdf::Error| ReviewAiError::PdfExtraction {
        file: path.display().to_string(),
        message: e.to_string(),
    };

    let document = Document::load(path).map_err(to_error)?;

    let mut text = String::new();
    for page_number in document.get_pages().into_keys() {
        let page_text = document.extract_text(&[page_number]).map_err(to_error)?;
        text.push_str(&page_text);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extract_text_invalid_pdf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();

        let result = extract_text(&path);
        assert!(matches!(result, Err(ReviewAiError::PdfExtraction { .. })));
    }

    #[test]
    fn test_extract_text_missing_file() {
        assert!(extract_text(Path::new("/nonexistent/paper.pdf")).is_err());
    }
}
