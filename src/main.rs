use clap::Parser;
use review_ai_common::{
    normalize_notes, CriteriaResult, ExtractionResult, PromptTemplate, ScreeningResult,
    StructuredReply,
};
use review_ai_rust::{analyzer, cli, config, csv_io, error, logging, scanner};
use analyzer::OpenAiClient;
use cli::{Cli, Commands};
use config::Config;
use error::{Result, ReviewAiError};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = Config::load()?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    match cli.command {
        Commands::Criteria { input, output } => {
            println!("📚 review-ai - 基準分類\n");
            run_csv_pipeline::<CriteriaResult>(&config, &PromptTemplate::CRITERIA, &input, &output).await?;
        }

        Commands::Screen { input, output } => {
            println!("🔎 review-ai - スクリーニング\n");
            let output = output.unwrap_or_else(|| cli::default_screening_output(&config.model));
            run_csv_pipeline::<ScreeningResult>(&config, &PromptTemplate::SCREENING, &input, &output).await?;
        }

        Commands::Extract { folder, output } => {
            println!("📄 review-ai - PDF情報抽出\n");
            let client = OpenAiClient::from_config(&config)?;
            let output = output.unwrap_or_else(|| cli::default_extraction_output(&config.model));

            // 1. PDFスキャン
            println!("[1/3] PDFをスキャン中...");
            let pdfs = scanner::list_pdf_files(&folder)?;
            println!("✔ {}件のPDFを検出\n", pdfs.len());

            // 2. 抽出
            println!("[2/3] AI抽出中... (モデル: {})", config.model);
            let articles = analyzer::extract_articles::<ExtractionResult, _>(&client, &config.model, &pdfs).await?;
            println!("✔ {}件を抽出（スキップ {}件）\n", articles.len(), pdfs.len() - articles.len());

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            csv_io::save_csv(&articles, &output)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Feedback { input } => {
            println!("🎓 review-ai - 講評\n");
            let client = OpenAiClient::from_config(&config)?;
            let abstract_text = read_text_file(&input)?;
            tracing::debug!(chars = abstract_text.len(), "アブストラクト読み込み完了");

            let feedback = analyzer::ask_feedback(&client, &config.model, &abstract_text).await?;
            println!("講評:\n{}", feedback);
        }

        Commands::Categorize { text } => {
            println!("🏷  review-ai - 分野分類\n");
            let client = OpenAiClient::from_config(&config)?;

            let category = analyzer::categorize_abstract(&client, &config.model, &text).await?;
            println!("分類結果: {}", category);
        }

        Commands::Config { set_api_key, set_model, show } => {
            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

/// CSV → notes正規化 → 分類 → CSV
async fn run_csv_pipeline<T: StructuredReply>(
    config: &Config,
    template: &PromptTemplate,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let client = OpenAiClient::from_config(config)?;

    // 1. 読み込み
    println!("[1/3] CSVを読み込み中...");
    let mut records = csv_io::read_csv(input)?;
    normalize_notes(&mut records)?;
    println!("✔ {}件の論文を読み込み\n", records.len());

    // 2. 分類
    println!("[2/3] AI分類中... (モデル: {})", config.model);
    let records = analyzer::classify_records::<T, _>(
        &client,
        &config.model,
        template,
        analyzer::ABSTRACT_FIELD,
        records,
    )
    .await?;
    println!("✔ 分類完了\n");

    // 3. 保存
    println!("[3/3] 結果を保存中...");
    csv_io::save_csv(&records, output)?;
    println!("✔ 結果を保存: {}", output.display());

    println!("\n✅ 完了");
    Ok(())
}

fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ReviewAiError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}
