//! OpenAI chat/completions 連携
//!
//! 1レコードにつき1リクエスト。リトライはしない（失敗はバッチ全体を中断する）。

use super::client::{CompletionClient, CompletionRequest};
use crate::config::Config;
use crate::error::{ReviewAiError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// chat/completions レスポンス（必要な部分のみ）
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReviewAiError::ApiCall(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key,
        })
    }

    /// 設定からクライアントを生成（APIキーがなければエラー）
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::new(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn endpoint(&self) -> String {
        if self.base_url.ends_with('/') {
            format!("{}chat/completions", self.base_url)
        } else {
            format!("{}/chat/completions", self.base_url)
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        debug!(model = %request.model, messages = request.messages.len(), "chat/completions 送信");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ReviewAiError::ApiCall(format!("リクエスト失敗: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ReviewAiError::ApiCall(format!("API error ({}): {}", status, text)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReviewAiError::ApiCall(format!("レスポンス読み込み失敗: {}", e)))?;

        let content = reply_content(&body)?;
        debug!(chars = content.len(), "応答受信");
        Ok(content)
    }
}

/// レスポンスJSONから choices[0].message.content を取り出す
fn reply_content(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ReviewAiError::ApiParse(format!("レスポンスJSONが不正: {}", e)))?;

    let message = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message)
        .ok_or_else(|| ReviewAiError::ApiCall("応答が空です (choicesなし)".into()))?;

    if let Some(refusal) = message.refusal {
        return Err(ReviewAiError::ApiCall(format!("モデルが応答を拒否: {}", refusal)));
    }

    message
        .content
        .ok_or_else(|| ReviewAiError::ApiCall("応答本文がありません".into()))
}
