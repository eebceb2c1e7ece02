use review_ai_common::{PromptTemplate, ScreeningResult};
use review_ai_rust::analyzer::{request_structured, OpenAiClient};
use review_ai_rust::config::{Config, API_KEY_ENV};
use std::time::Duration;

#[tokio::test]
async fn openai_screening_integration() {
    let api_key = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("{} not set; skipping integration test", API_KEY_ENV);
            return;
        }
    };

    let config = Config::default();
    let client = OpenAiClient::new(api_key, &config.base_url, Duration::from_secs(60))
        .expect("client init failed");

    let messages = PromptTemplate::SCREENING.conversation(
        "This study investigates how small and medium-sized enterprises adopt artificial \
         intelligence tools in their marketing operations, based on interviews with 30 managers.",
    );

    let result: ScreeningResult = request_structured(&client, &config.model, messages)
        .await
        .expect("screening request failed");

    assert!(result.is_match);
    assert!(!result.reason.is_empty());
}
