//! CSV入出力
//!
//! - read_csv: 見出し行付きCSVをレコード列として読み込む（値はすべて文字列）
//! - save_csv: 1件目のレコードの列を見出しとして書き出す

use crate::error::{ReviewAiError, Result};
use review_ai_common::Record;
use std::path::Path;
use tracing::debug;

pub fn read_csv(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(ReviewAiError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(headers.iter().zip(row.iter()).collect::<Record>());
    }

    debug!(path = %path.display(), rows = records.len(), "CSV読み込み完了");
    Ok(records)
}

/// レコード列をCSVに保存
///
/// 見出しは1件目のレコードの列。書き込み前に全件を検査し、
/// 見出しにない列を持つレコードがあればファイルを作らずにエラーを返す。
/// 見出しの列が欠けているレコードは空セルで出力する。
pub fn save_csv(records: &[Record], path: &Path) -> Result<()> {
    let first = records.first().ok_or(ReviewAiError::EmptyData)?;
    let headers: Vec<&str> = first.keys().collect();

    for (index, record) in records.iter().enumerate() {
        if let Some(field) = record.keys().find(|key| !headers.contains(key)) {
            return Err(ReviewAiError::SchemaDrift {
                row: index + 1,
                field: field.to_string(),
            });
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;
    for record in records {
        writer.write_record(headers.iter().map(|header| record.get(header).unwrap_or("")))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "CSV書き込み完了");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_csv_not_found() {
        let result = read_csv(Path::new("/nonexistent/articles.csv"));
        assert!(matches!(result, Err(ReviewAiError::FileNotFound(_))));
    }

    #[test]
    fn test_read_csv_values_are_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.csv");
        std::fs::write(&path, "title,year,abstract\n\"AI, SMEs\",2021,\"line1\nline2\"\n").unwrap();

        let records = read_csv(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("title"), Some("AI, SMEs"));
        assert_eq!(records[0].get("year"), Some("2021"));
        assert_eq!(records[0].get("abstract"), Some("line1\nline2"));
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["title", "year", "abstract"]);
    }

    #[test]
    fn test_read_csv_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.csv");
        std::fs::write(&path, "abstract,notes\n").unwrap();

        assert!(read_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_csv_ragged_row_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.csv");
        std::fs::write(&path, "abstract,notes\nonly one column\n").unwrap();

        assert!(matches!(read_csv(&path), Err(ReviewAiError::Csv(_))));
    }

    #[test]
    fn test_save_csv_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("out.csv");
        let records = vec![Record::from_iter([("name", "a")])];

        save_csv(&records, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name\na\n");
    }

    #[test]
    fn test_save_csv_missing_column_is_blank() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            Record::from_iter([("name", "a"), ("context", "x")]),
            Record::from_iter([("name", "b")]),
        ];

        save_csv(&records, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name,context\na,x\nb,\n");
    }
}
