//! notes列の正規化
//!
//! レビュー担当者が自由記述したnotesを、固定ラベルに変換する。
//! パターンは Included → Excluded → Maybe の順に検査し、最初に一致したものを採用。

use crate::error::Result;
use crate::record::Record;

/// 正規化対象の列名
pub const NOTES_FIELD: &str = "notes";

/// レビュー状況ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesLabel {
    Included,
    Excluded,
    Maybe,
    /// いずれにも一致しない（空文字）
    Unlabeled,
}

impl NotesLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotesLabel::Included => "Included",
            NotesLabel::Excluded => "Excluded",
            NotesLabel::Maybe => "Maybe",
            NotesLabel::Unlabeled => "",
        }
    }
}

impl std::fmt::Display for NotesLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// (ラベル, 部分文字列) の検査順リスト
const NOTES_PATTERNS: &[(NotesLabel, &str)] = &[
    (NotesLabel::Included, "Included"),
    (NotesLabel::Excluded, "Excluded"),
    (NotesLabel::Maybe, "Maybe"),
];

/// 自由記述からラベルを判定（大文字小文字は区別する）
pub fn notes_label(text: &str) -> NotesLabel {
    NOTES_PATTERNS
        .iter()
        .find(|(_, pattern)| text.contains(pattern))
        .map(|(label, _)| *label)
        .unwrap_or(NotesLabel::Unlabeled)
}

/// 全レコードのnotes列をラベルに置き換える
///
/// notes列がないレコードがあればエラー
pub fn normalize_notes(records: &mut [Record]) -> Result<()> {
    for record in records.iter_mut() {
        let label = notes_label(record.require(NOTES_FIELD)?);
        record.set(NOTES_FIELD, label.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_notes_label_each_pattern() {
        assert_eq!(notes_label("Included"), NotesLabel::Included);
        assert_eq!(notes_label("Excluded by reviewer 2"), NotesLabel::Excluded);
        assert_eq!(notes_label("Maybe include"), NotesLabel::Maybe);
        assert_eq!(notes_label("RAYYAN-INCLUSION: {\"Ana\"=>\"Included\"}"), NotesLabel::Included);
    }

    #[test]
    fn test_notes_label_no_match() {
        assert_eq!(notes_label(""), NotesLabel::Unlabeled);
        assert_eq!(notes_label("pending"), NotesLabel::Unlabeled);
        assert_eq!(NotesLabel::Unlabeled.as_str(), "");
    }

    #[test]
    fn test_notes_label_is_case_sensitive() {
        assert_eq!(notes_label("included"), NotesLabel::Unlabeled);
        assert_eq!(notes_label("MAYBE"), NotesLabel::Unlabeled);
    }

    #[test]
    fn test_notes_label_included_wins_over_excluded() {
        assert_eq!(notes_label("Excluded, later Included"), NotesLabel::Included);
        assert_eq!(notes_label("Included / Excluded"), NotesLabel::Included);
    }

    #[test]
    fn test_notes_label_excluded_wins_over_maybe() {
        assert_eq!(notes_label("Maybe -> Excluded"), NotesLabel::Excluded);
    }

    #[test]
    fn test_normalize_notes_rewrites_field() {
        let mut records = vec![
            Record::from_iter([("abstract", "a"), ("notes", "Maybe include")]),
            Record::from_iter([("abstract", "b"), ("notes", "Included and Excluded")]),
            Record::from_iter([("abstract", "c"), ("notes", "no decision")]),
        ];

        normalize_notes(&mut records).unwrap();

        assert_eq!(records[0].get("notes"), Some("Maybe"));
        assert_eq!(records[1].get("notes"), Some("Included"));
        assert_eq!(records[2].get("notes"), Some(""));
        // 他の列は変更されない
        assert_eq!(records[0].get("abstract"), Some("a"));
    }

    #[test]
    fn test_normalize_notes_missing_field() {
        let mut records = vec![Record::from_iter([("abstract", "a")])];
        let result = normalize_notes(&mut records);
        assert!(matches!(result, Err(Error::MissingField(f)) if f == NOTES_FIELD));
    }
}
