//! AI解析パイプライン
//!
//! レコードを1件ずつ処理する（プロンプト生成 → API呼び出し → マージ）。
//! 呼び出しは逐次で、出力順は入力順と同じ。

pub mod client;
pub mod openai;

pub use client::{request_structured, request_text, CompletionClient, CompletionRequest};
pub use openai::OpenAiClient;

use crate::error::Result;
use crate::scanner::{self, PdfInfo};
use indicatif::{ProgressBar, ProgressStyle};
use review_ai_common::{
    article_record, few_shot_conversation, merge_reply, PromptTemplate, Record, StructuredReply,
};
use tracing::{debug, info, warn};

/// アブストラクトを格納する列
pub const ABSTRACT_FIELD: &str = "abstract";

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

/// CSVレコードを構造化応答で分類
///
/// 各レコードの `text_field` 列をテンプレートに埋め込み、応答のフィールドをマージする。
/// 1件でも呼び出しに失敗した場合はバッチ全体をエラーで中断する。
pub async fn classify_records<T, C>(
    client: &C,
    model: &str,
    template: &PromptTemplate,
    text_field: &str,
    records: Vec<Record>,
) -> Result<Vec<Record>>
where
    T: StructuredReply,
    C: CompletionClient + ?Sized,
{
    let total = records.len();
    let progress = progress_bar(total);
    let mut classified = Vec::with_capacity(total);

    for (index, mut record) in records.into_iter().enumerate() {
        let messages = template.conversation(record.require(text_field)?);
        let reply: T = request_structured(client, model, messages).await?;
        merge_reply(&mut record, reply);

        debug!(index, total, "分類完了");
        classified.push(record);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(classified)
}

/// PDF本文から情報を抽出
///
/// テキスト抽出に失敗したファイル、本文が空のファイルはスキップして続行する。
/// ファイル名の形式が不正な場合と、API呼び出しの失敗は中断する。
pub async fn extract_articles<T, C>(
    client: &C,
    model: &str,
    pdfs: &[PdfInfo],
) -> Result<Vec<Record>>
where
    T: StructuredReply,
    C: CompletionClient + ?Sized,
{
    let progress = progress_bar(pdfs.len());
    let mut articles = Vec::new();

    for (index, pdf) in pdfs.iter().enumerate() {
        progress.set_message(pdf.file_name.clone());
        let name = scanner::article_name(&pdf.path)?;

        let full_text = match scanner::extract_text(&pdf.path) {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                progress.suspend(|| warn!(file = %pdf.file_name, "テキストが空のためスキップ"));
                progress.inc(1);
                continue;
            }
            Err(e) => {
                progress.suspend(|| warn!(file = %pdf.file_name, error = %e, "抽出エラーのためスキップ"));
                progress.inc(1);
                continue;
            }
        };
        debug!(file = %pdf.file_name, chars = full_text.len(), "テキスト抽出完了");

        let messages = PromptTemplate::EXTRACTION.conversation(&full_text);
        let reply: T = request_structured(client, model, messages).await?;
        articles.push(article_record(&name, reply));

        debug!(index, article = %name, "抽出完了");
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!(processed = articles.len(), skipped = pdfs.len() - articles.len(), "PDF抽出完了");
    Ok(articles)
}

/// アブストラクトへの講評を取得
pub async fn ask_feedback<C>(client: &C, model: &str, abstract_text: &str) -> Result<String>
where
    C: CompletionClient + ?Sized,
{
    request_text(client, model, PromptTemplate::FEEDBACK.conversation(abstract_text)).await
}

/// few-shot でアブストラクトの分野を分類
pub async fn categorize_abstract<C>(client: &C, model: &str, abstract_text: &str) -> Result<String>
where
    C: CompletionClient + ?Sized,
{
    request_text(client, model, few_shot_conversation(abstract_text)).await
}
