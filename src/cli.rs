use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// categorize のデフォルト入力（例文）
pub const EXAMPLE_ABSTRACT: &str = "Este trabalho propõe um novo modelo para estimar o risco de crédito utilizando aprendizado de máquina supervisionado.";

#[derive(Parser)]
#[command(name = "review-ai")]
#[command(about = "文献レビュー用 論文アブストラクト・PDF AI分類/抽出ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 使用するモデル（省略時は設定ファイルの値）
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アブストラクトを4つの基準で分類
    Criteria {
        /// 入力CSV（abstract, notes 列が必要）
        #[arg(short, long, default_value = "articles.csv")]
        input: PathBuf,

        /// 出力CSV
        #[arg(short, long, default_value = "articles_new.csv")]
        output: PathBuf,
    },

    /// アブストラクトが研究テーマに合致するか判定
    Screen {
        /// 入力CSV（abstract, notes 列が必要）
        #[arg(short, long, default_value = "data/articles.csv")]
        input: PathBuf,

        /// 出力CSV（デフォルト: data/articles_<モデル名>.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// PDF本文から活動領域・文脈・AI導入段階を抽出
    Extract {
        /// PDFフォルダ（直下のみ）
        #[arg(short, long, default_value = "articles")]
        folder: PathBuf,

        /// 出力CSV（デフォルト: data/data_extraction_<モデル名>.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// アブストラクトへの講評を取得
    Feedback {
        /// アブストラクトのテキストファイル
        #[arg(short, long, default_value = "abstract.txt")]
        input: PathBuf,
    },

    /// 例示（few-shot）をもとにアブストラクトの分野を分類
    Categorize {
        /// 分類するアブストラクト
        #[arg(default_value = EXAMPLE_ABSTRACT)]
        text: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// デフォルトのモデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// screen のデフォルト出力先
pub fn default_screening_output(model: &str) -> PathBuf {
    PathBuf::from("data").join(format!("articles_{}.csv", model))
}

/// extract のデフォルト出力先
pub fn default_extraction_output(model: &str) -> PathBuf {
    PathBuf::from("data").join(format!("data_extraction_{}.csv", model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_output_paths() {
        let cli = Cli::parse_from(["review-ai", "criteria"]);
        match cli.command {
            Commands::Criteria { input, output } => {
                assert_eq!(input, PathBuf::from("articles.csv"));
                assert_eq!(output, PathBuf::from("articles_new.csv"));
            }
            _ => panic!("expected criteria"),
        }

        let cli = Cli::parse_from(["review-ai", "extract"]);
        match cli.command {
            Commands::Extract { folder, output } => {
                assert_eq!(folder, PathBuf::from("articles"));
                assert!(output.is_none());
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_global_model_flag() {
        let cli = Cli::parse_from(["review-ai", "screen", "--model", "gpt-4o", "-v"]);
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_categorize_default_text() {
        let cli = Cli::parse_from(["review-ai", "categorize"]);
        match cli.command {
            Commands::Categorize { text } => assert_eq!(text, EXAMPLE_ABSTRACT),
            _ => panic!("expected categorize"),
        }
    }

    #[test]
    fn test_default_outputs_use_model_name() {
        assert_eq!(
            default_screening_output("gpt-4.1-mini"),
            PathBuf::from("data").join("articles_gpt-4.1-mini.csv")
        );
        assert_eq!(
            default_extraction_output("gpt-4.1-mini"),
            PathBuf::from("data").join("data_extraction_gpt-4.1-mini.csv")
        );
    }
}
