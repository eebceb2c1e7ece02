//! APIレスポンスパーサー
//!
//! モデルの応答本文からJSONオブジェクトを抽出し、型付きの構造体にパースする。
//! strictスキーマ指定時は本文がそのままJSONだが、コードブロックで囲まれた応答にも対応する。

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use review_ai_common::extract_json;
///
/// let response = "{\"match\": true, \"reason\": \"SME\"}";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("match"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 構造化応答をパース
///
/// 本文全体をそのままJSONとして読み、失敗した場合のみ `extract_json` で抽出する。
///
/// # Arguments
/// * `response` - モデルの応答本文
///
/// # Returns
/// * `Ok(T)` - パース成功
/// * `Err` - JSONが見つからないか、スキーマと一致しない
pub fn parse_structured<T: DeserializeOwned>(response: &str) -> Result<T> {
    if let Ok(parsed) = serde_json::from_str(response.trim()) {
        return Ok(parsed);
    }

    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("構造化応答のパースエラー: {}", e)))
}
