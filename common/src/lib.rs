//! Review AI Common Library
//!
//! 各パイプライン（基準分類・スクリーニング・PDF抽出）で共有される型と純粋ロジック

pub mod types;
pub mod record;
pub mod notes;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod analyzer;

pub use types::{
    ChatMessage, CriteriaResult, ExtractionResult, Role, ScreeningResult, StructuredReply,
};
pub use record::Record;
pub use notes::{normalize_notes, notes_label, NotesLabel, NOTES_FIELD};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_structured};
pub use prompts::{few_shot_conversation, PromptTemplate};
pub use analyzer::{article_record, merge_reply, NAME_FIELD};
