//! 型定義
//!
//! - ChatMessage: モデルへ送る会話メッセージ
//! - StructuredReply: 構造化応答（スキーマ宣言とレコードへの展開）
//! - CriteriaResult / ScreeningResult / ExtractionResult: 各パイプラインの応答

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// メッセージの話者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// 会話メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// 構造化応答
///
/// モデルに宣言するJSON Schemaと、レコードへ展開する列を定義する
pub trait StructuredReply: DeserializeOwned {
    /// response_format に渡すスキーマ名
    const SCHEMA_NAME: &'static str;

    /// strictモード用のJSON Schema
    fn json_schema() -> Value;

    /// レコードに追加する (列名, 値) を宣言順に返す
    fn into_fields(self) -> Vec<(String, String)>;
}

/// プロパティ名と型から strict 用のobjectスキーマを組み立てる
fn object_schema(properties: &[(&str, &str)]) -> Value {
    let props: Map<String, Value> = properties
        .iter()
        .map(|(name, ty)| (name.to_string(), json!({ "type": ty })))
        .collect();
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();

    json!({
        "type": "object",
        "properties": props,
        "required": required,
        "additionalProperties": false,
    })
}

/// 基準分類の応答（複数該当可）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaResult {
    pub criteria_1: bool,  // AIの導入・実装・利用
    pub criteria_2: bool,  // 中小企業
    pub criteria_3: bool,  // 技術面のみ（経営・戦略の観点なし）
    pub criteria_4: bool,  // 大企業
}

impl StructuredReply for CriteriaResult {
    const SCHEMA_NAME: &'static str = "criteria_result";

    fn json_schema() -> Value {
        object_schema(&[
            ("criteria_1", "boolean"),
            ("criteria_2", "boolean"),
            ("criteria_3", "boolean"),
            ("criteria_4", "boolean"),
        ])
    }

    fn into_fields(self) -> Vec<(String, String)> {
        vec![
            ("criteria_1".into(), self.criteria_1.to_string()),
            ("criteria_2".into(), self.criteria_2.to_string()),
            ("criteria_3".into(), self.criteria_3.to_string()),
            ("criteria_4".into(), self.criteria_4.to_string()),
        ]
    }
}

/// スクリーニングの応答
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    #[serde(rename = "match")]
    pub is_match: bool,
    pub reason: String,
}

impl StructuredReply for ScreeningResult {
    const SCHEMA_NAME: &'static str = "screening_result";

    fn json_schema() -> Value {
        object_schema(&[("match", "boolean"), ("reason", "string")])
    }

    fn into_fields(self) -> Vec<(String, String)> {
        vec![
            ("match".into(), self.is_match.to_string()),
            ("reason".into(), self.reason),
        ]
    }
}

/// PDF本文からの抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub area_of_activity: String,
    pub context: String,
    pub ai_implementation_state: String,
}

impl StructuredReply for ExtractionResult {
    const SCHEMA_NAME: &'static str = "extraction_result";

    fn json_schema() -> Value {
        object_schema(&[
            ("area_of_activity", "string"),
            ("context", "string"),
            ("ai_implementation_state", "string"),
        ])
    }

    fn into_fields(self) -> Vec<(String, String)> {
        vec![
            ("area_of_activity".into(), self.area_of_activity),
            ("context".into(), self.context),
            ("ai_implementation_state".into(), self.ai_implementation_state),
        ]
    }
}
