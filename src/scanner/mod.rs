mod pdf_text;

pub use pdf_text::extract_text;

use crate::error::{ReviewAiError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PdfInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const PDF_EXTENSION: &str = ".pdf";

/// フォルダ直下のPDFファイルを列挙（拡張子は大文字小文字を区別しない）
pub fn list_pdf_files(folder: &Path) -> Result<Vec<PdfInfo>> {
    if !folder.is_dir() {
        return Err(ReviewAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut pdfs = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if is_pdf_file_name(&file_name) {
            pdfs.push(PdfInfo {
                path: path.to_path_buf(),
                file_name,
            });
        }
    }

    // ファイル名でソート
    pdfs.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(pdfs)
}

fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(PDF_EXTENSION)
}

/// PDFファイル名から論文名を取得
///
/// ファイル名を ".pdf" で分割し、「空でない名前 + 末尾の .pdf」の形だけを受け付ける。
/// `paper.PDF` や `a.pdf.pdf` などは推測せずエラーにする。
pub fn article_name(path: &Path) -> Result<String> {
    lazy_static::lazy_static! {
        static ref PDF_SUFFIX_RE: Regex = Regex::new(r"\.pdf").unwrap();
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let parts: Vec<&str> = PDF_SUFFIX_RE.split(&file_name).collect();
    match parts.as_slice() {
        [name, ""] if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ReviewAiError::InvalidPdfName(file_name)),
    }
}
