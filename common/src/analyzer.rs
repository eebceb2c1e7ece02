//! 解析ロジック（共通）
//!
//! 構造化応答をレコードへ展開する

use crate::record::Record;
use crate::types::StructuredReply;

/// PDF抽出で論文名を格納する列
pub const NAME_FIELD: &str = "name";

/// 応答のフィールドをレコードにマージ（応答側が優先）
pub fn merge_reply<T: StructuredReply>(record: &mut Record, reply: T) {
    record.merge(reply.into_fields());
}

/// PDF1件分のレコードを生成（name + 応答フィールド）
pub fn article_record<T: StructuredReply>(name: &str, reply: T) -> Record {
    let mut record = Record::new();
    record.set(NAME_FIELD, name);
    merge_reply(&mut record, reply);
    record
}
