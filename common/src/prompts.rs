//! プロンプト生成モジュール
//!
//! 各パイプラインの固定システムプロンプトと、1回の呼び出し分の会話を組み立てる。
//! 会話は呼び出しごとに新しく生成し、共有バッファを使い回さない。
//!
//! - PromptTemplate: システムプロンプト + ユーザーメッセージの書式
//! - few_shot_conversation: 分野分類用の few-shot 会話

use crate::types::ChatMessage;

/// 基準分類（4基準、複数該当可）
pub const CRITERIA_SYSTEM_PROMPT: &str = r#"
You are Phd professor working in a literature review for your research, you need to analise the abstracts and classify it according with the criteria below, you can classify with more than one criteria:

criteria 1: Studies focused on the adoption, implementation, or use of AI (Artificial Intelligence).
criteria 2: Studies focused in small and medium-sized enterprises (SMEs). 
criteria 3: Studies focused only on AI as a technical innovation with no managerial or strategic dimension.
criteria 4: Studies focusing on AI in large corporations.
"#;

/// スクリーニング（研究テーマとの合致判定）
pub const SCREENING_SYSTEM_PROMPT: &str = r#"
### CONTEXT ###
You are Phd professor working in a literature review for your research, you need to analyze an article's abstract and determine whether it matches your research topic. The research aims to investigate how small and medium-sized enterprises (SMEs) are using artificial intelligence (AI), machine-learning (ML), Deep Learning (DL), Artificial Neural Networks (ANN) or Neural Network (NN) in their operations. The research seeks to identify the benefits, challenges, and best practices related to the adoption and use of this technologies, with the goal of understanding the influence of this technology on organizational performance and company competitiveness.

Abstract:
“{article_abstract}”

### OBJECTIVE & RESPONSE FORMAT ###
Your objective is to determine whether an article is related to your research and answer with the reason it should be part of your literature review, the reason must be short and directly. 
"#;

/// PDF本文からの活動領域・文脈・AI導入段階の抽出
pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"
### CONTEXT ###
You are Phd professor working in a literature review for your research, you need to read the abstract, introduction, and conclusion of the article below. 

- Area of Activity: Identify the primary business function or field the article addresses. Is it marketing, operations, customer service, fraud detection, human resources, etc.? Look for keywords related to  areas.

- Context: Determine the specific problem, technology, or scenario the article discusses. What is the article's core topic? For example, if the area of activity is marketing, the context could be "using AI for customer segmentation" or "predictive analytics in ad campaigns." The context is the "what" of the article.

- AI Implementation State: Analyze how AI is being used. Match the article's AI application to one of the four maturity stages: Experimentation and Proof of Concept: The article talks about a pilot project, a test, or an early-stage exploration. The language will be speculative, focusing on potential rather than widespread use;  Tactical and Departmental Adoption: The article describes AI being used to solve a specific problem within a single department or function. It's a practical application, but not yet a company-wide strategy; Corporate Strategy and Optimization: The article discusses a company-wide initiative or the integration of AI across multiple departments. It frames AI as a strategic tool for business optimization; AI-Driven Transformation and Innovation: The article focuses on how AI is creating new business models, products, or services. It's about fundamental change, not just efficiency. Look for terms like "redefining the industry" or "creating new value propositions."


Article:
“{full_text}”

### AUDIENCE ###
The audience is are another academic professionals.

### STYLE & TONE ###
Your style should be clear, concise, and professional. The tone should be informative and confident.

### OBJECTIVE & RESPONSE FORMAT ###
You need to determine Area of Activity, Context, and AI Implementation State the article, the answer must be short and directly. 
"#;

/// アブストラクトへの講評
pub const FEEDBACK_SYSTEM_PROMPT: &str = "You are a highly knowledgeable PhD professor in AI research. \
Provide detailed, constructive, and scholarly feedback on the student's abstract, \
focusing on AI adoption, implementation, or use.";

/// 分野分類（few-shot）のシステムプロンプト
pub const FEW_SHOT_SYSTEM_PROMPT: &str = "Você é um assistente especializado em classificar resumos de artigos acadêmicos. \
Sua tarefa é analisar cada resumo fornecido e atribuí-lo a uma das categorias pré-definidas com base em exemplos.";

/// 分野分類（few-shot）の例示
pub const FEW_SHOT_EXAMPLES: &str = r#"Exemplos de classificação:

Resumo: Este artigo apresenta uma nova abordagem para o treinamento de redes neurais convolucionais aplicadas à visão computacional.
Classificação: Inteligência Artificial

Resumo: O estudo investiga o impacto de políticas públicas na distribuição de renda no Brasil entre 2000 e 2020.
Classificação: Economia

Resumo: Um levantamento dos principais métodos de prevenção de doenças cardiovasculares em populações urbanas.
Classificação: Saúde Pública"#;

/// システムプロンプトとユーザーメッセージ書式の組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub system: &'static str,
    /// ユーザーメッセージの見出し（"Abstract" など）。None なら本文をそのまま送る
    pub label: Option<&'static str>,
}

impl PromptTemplate {
    pub const CRITERIA: PromptTemplate = PromptTemplate {
        system: CRITERIA_SYSTEM_PROMPT,
        label: Some("Abstract"),
    };

    pub const SCREENING: PromptTemplate = PromptTemplate {
        system: SCREENING_SYSTEM_PROMPT,
        label: Some("Abstract"),
    };

    pub const EXTRACTION: PromptTemplate = PromptTemplate {
        system: EXTRACTION_SYSTEM_PROMPT,
        label: Some("Article"),
    };

    pub const FEEDBACK: PromptTemplate = PromptTemplate {
        system: FEEDBACK_SYSTEM_PROMPT,
        label: None,
    };

    /// ユーザーメッセージ本文（長文でも切り詰めない）
    pub fn user_message(&self, text: &str) -> String {
        match self.label {
            Some(label) => format!("{}: {}", label, text),
            None => text.to_string(),
        }
    }

    /// [system, user] の2メッセージ会話を生成
    pub fn conversation(&self, text: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system),
            ChatMessage::user(self.user_message(text)),
        ]
    }
}

/// 分野分類用の会話を生成
///
/// 固定の system + 例示の後ろに、分類対象の1件だけを追加する
pub fn few_shot_conversation(abstract_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(FEW_SHOT_SYSTEM_PROMPT),
        ChatMessage::user(FEW_SHOT_EXAMPLES),
        ChatMessage::user(format!("Resumo: {}\nQual é a classificação?", abstract_text)),
    ]
}
