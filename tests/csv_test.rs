//! CSV入出力テスト
//!
//! 書き込み → 読み込みの往復、空データ、列の不一致を検証

use review_ai_common::Record;
use review_ai_rust::csv_io::{read_csv, save_csv};
use review_ai_rust::error::ReviewAiError;
use tempfile::tempdir;

fn article(title: &str, abstract_text: &str, notes: &str) -> Record {
    Record::from_iter([
        ("title", title),
        ("abstract", abstract_text),
        ("notes", notes),
    ])
}

/// 同じ列構成のレコードは往復で一致する
#[test]
fn test_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("articles.csv");

    let records = vec![
        article("AI in SMEs", "We study AI adoption in SMEs", "Maybe"),
        article("Quoted \"title\"", "Comma, separated\nand multi-line", ""),
        article("Ünïcödé", "機械学習の導入", "Included"),
    ];

    save_csv(&records, &path).expect("CSV保存失敗");
    let loaded = read_csv(&path).expect("CSV読み込み失敗");

    assert_eq!(loaded, records);
}

/// 見出しは1件目のレコードの列順
#[test]
fn test_header_from_first_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("out.csv");

    let records = vec![
        Record::from_iter([("name", "a"), ("context", "x"), ("area_of_activity", "y")]),
        Record::from_iter([("context", "z"), ("name", "b"), ("area_of_activity", "w")]),
    ];
    save_csv(&records, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().next(), Some("name,context,area_of_activity"));
    assert_eq!(content.lines().nth(2), Some("b,z,w"));
}

/// 空データはエラーでファイルを作らない
#[test]
fn test_empty_records_error_no_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");

    let result = save_csv(&[], &path);

    assert!(matches!(result, Err(ReviewAiError::EmptyData)));
    assert!(!path.exists(), "空データでファイルが作成された");
}

/// 見出しにない列を持つレコードはエラーでファイルを作らない
#[test]
fn test_schema_drift_error_no_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("drift.csv");

    let records = vec![
        Record::from_iter([("name", "a")]),
        Record::from_iter([("name", "b"), ("extra", "x")]),
    ];
    let result = save_csv(&records, &path);

    match result {
        Err(ReviewAiError::SchemaDrift { row, field }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "extra");
        }
        other => panic!("Expected SchemaDrift, got {:?}", other),
    }
    assert!(!path.exists());
}
