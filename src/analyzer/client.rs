//! モデル呼び出しの抽象化
//!
//! CompletionClient はリクエスト1件を送り、応答本文を返すだけの境界。
//! 構造化応答の場合はスキーマを宣言し、型付きでデシリアライズする。

use crate::error::{ReviewAiError, Result};
use async_trait::async_trait;
use review_ai_common::{parse_structured, ChatMessage, StructuredReply};
use serde::Serialize;
use serde_json::Value;

/// サンプリング温度（決定的な応答のため0固定）
pub const TEMPERATURE: f32 = 0.0;

/// chat/completions リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: JsonSchemaFormat },
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: Value,
}

impl CompletionRequest {
    pub fn new(model: &str, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.to_string(),
            messages,
            temperature: TEMPERATURE,
            response_format: None,
        }
    }

    /// 応答を T のスキーマに制約する
    pub fn with_schema<T: StructuredReply>(mut self) -> Self {
        self.response_format = Some(ResponseFormat::JsonSchema {
            json_schema: JsonSchemaFormat {
                name: T::SCHEMA_NAME.to_string(),
                strict: true,
                schema: T::json_schema(),
            },
        });
        self
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// リクエストを1件送信し、応答本文を返す
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// 構造化応答を要求し、T にデシリアライズする
pub async fn request_structured<T, C>(
    client: &C,
    model: &str,
    messages: Vec<ChatMessage>,
) -> Result<T>
where
    T: StructuredReply,
    C: CompletionClient + ?Sized,
{
    let request = CompletionRequest::new(model, messages).with_schema::<T>();
    let content = client.complete(&request).await?;

    parse_structured(&content)
        .map_err(|e| ReviewAiError::ApiParse(format!("{}: {}", T::SCHEMA_NAME, e)))
}

/// 自由記述の応答を要求する
pub async fn request_text<C>(client: &C, model: &str, messages: Vec<ChatMessage>) -> Result<String>
where
    C: CompletionClient + ?Sized,
{
    let request = CompletionRequest::new(model, messages);
    client.complete(&request).await
}
