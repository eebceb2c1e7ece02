use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。環境変数 OPENAI_API_KEY（.env可）か `review-ai config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("CSV読み書きエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF読み込みエラー ({file}): {message}")]
    PdfExtraction { file: String, message: String },

    #[error("PDFファイル名から論文名を取得できません: {0}")]
    InvalidPdfName(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("保存するデータがありません。CSVは出力しません")]
    EmptyData,

    #[error("{row}件目のレコードに見出しにない列があります: {field}")]
    SchemaDrift { row: usize, field: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] review_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, ReviewAiError>;
