//! End-to-end cascade behaviour over the bundled sample knowledge base.

use crate::cascade::{ResponseRouter, Stage};
use crate::loader::parse_knowledge_base;
use crate::refusals::{DOMAIN_REFUSAL, GENERATION_FAILURE_REFUSAL};
use crate::samples::PROBE_CATEGORIES;
use crate::service::router_with_client;
use crate::types::KnowledgeBase;
use concierge_core::AppConfig;
use concierge_llm::MockClient;
use std::sync::Arc;
use tempfile::TempDir;

fn sample_kb() -> KnowledgeBase {
    parse_knowledge_base(include_str!("../../../../dataset.json")).unwrap()
}

fn router_with(client: Arc<MockClient>) -> (ResponseRouter, TempDir) {
    let temp = TempDir::new().unwrap();
    let config = AppConfig {
        workspace: temp.path().to_path_buf(),
        provider: "mock".to_string(),
        ..AppConfig::default()
    };
    let router = router_with_client(&config, &sample_kb(), client).unwrap();
    (router, temp)
}

const DETERMINISTIC_INPUTS: &[&str] = &[
    "Who is the CEO of bdCalling IT?",
    "What services does SM Technology offer?",
    "How much is a mobile app?",
    "Do you work with Laravel?",
    "who is monir hossain",
    "who is zorak",
    "tell me about galaxy",
    "Will the weather be nice tomorrow?",
    "What is your favorite movie?",
    "How are you?",
];

#[tokio::test]
async fn test_faq_questions_answer_themselves() {
    let client = Arc::new(MockClient::replying(" unused reply text"));
    let (router, _temp) = router_with(client.clone());

    for entry in &sample_kb().faq {
        let resolution = router.resolve(&entry.question).await;
        assert_eq!(resolution.answer, entry.answer, "{}", entry.question);
        assert_eq!(resolution.stage, Stage::Faq);

        let shouted = router.route(&entry.question.to_uppercase()).await;
        assert_eq!(shouted, entry.answer);
    }

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_ceo_question_names_configured_ceo() {
    let (router, _temp) = router_with(Arc::new(MockClient::replying("")));

    let kb = sample_kb();
    let expected = format!(
        "The CEO of {} is {}.",
        kb.company.parent_company_info.name, kb.company.parent_company_info.ceo
    );
    assert_eq!(router.route("Who is the CEO of bdCalling IT?").await, expected);
}

#[tokio::test]
async fn test_keyword_order_decides_overlapping_triggers() {
    let (router, _temp) = router_with(Arc::new(MockClient::replying("")));

    // "price" precedes "mobile app" in the table
    let price = router.keywords().find("price").unwrap().to_string();
    let resolution = router.resolve("What is the price of a mobile app?").await;
    assert_eq!(resolution.stage, Stage::Keyword);
    assert_eq!(resolution.answer, price);
}

#[tokio::test]
async fn test_entity_aliases_and_unknown_names() {
    let (router, _temp) = router_with(Arc::new(MockClient::replying("")));

    let full = router.resolve("who is monir hossain").await;
    assert_eq!(full.stage, Stage::Entity);
    assert!(full.answer.starts_with("MD. Monir Hossain is the CEO"));
    assert_eq!(router.route("who is monir").await, full.answer);
    assert_eq!(router.route("who's hossain").await, full.answer);

    let unknown = router.resolve("who is zorak").await;
    assert_eq!(unknown.stage, Stage::Entity);
    assert!(unknown.answer.contains("zorak"));
}

#[tokio::test]
async fn test_weather_never_reaches_model() {
    let client = Arc::new(MockClient::replying(" It is sunny in Dhaka today."));
    let (router, _temp) = router_with(client.clone());

    for input in [
        "Will the weather be nice tomorrow?",
        "weather in dhaka",
        "Do you know the WEATHER forecast?",
    ] {
        let resolution = router.resolve(input).await;
        assert_eq!(resolution.answer, DOMAIN_REFUSAL, "{}", input);
        assert_eq!(resolution.stage, Stage::Relevance);
    }

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_invalid_generations_become_refusals() {
    let cases = [
        "",
        " Hi.",
        " I am the lead developer at SM Technology.",
        " Our founder is Mr. Karim.",
    ];

    for reply in cases {
        let client = Arc::new(MockClient::replying(reply));
        let (router, _temp) = router_with(client.clone());

        let resolution = router.resolve("Do you offer graphic design?").await;
        assert_eq!(resolution.answer, DOMAIN_REFUSAL, "{:?}", reply);
        assert_eq!(resolution.stage, Stage::Refused);
        assert_eq!(client.calls(), 1);
    }

    let long = format!(" {}", "SM Technology ".repeat(20));
    let (router, _temp) = router_with(Arc::new(MockClient::replying(long)));
    assert_eq!(
        router.route("Do you offer graphic design?").await,
        DOMAIN_REFUSAL
    );
}

#[tokio::test]
async fn test_model_failure_is_refusal_not_error() {
    let (router, _temp) = router_with(Arc::new(MockClient::failing("out of memory")));

    let resolution = router.resolve("Do you offer graphic design?").await;
    assert_eq!(resolution.answer, GENERATION_FAILURE_REFUSAL);
    assert_eq!(resolution.stage, Stage::Refused);
}

#[tokio::test]
async fn test_empty_input_gets_an_answer() {
    for client in [
        MockClient::replying(""),
        MockClient::failing("boom"),
        MockClient::replying(" SM Technology is happy to help."),
    ] {
        let (router, _temp) = router_with(Arc::new(client));
        assert!(!router.route("").await.is_empty());
        assert!(!router.route("   ").await.is_empty());
    }

    let (router, _temp) = router_with(Arc::new(MockClient::replying("")));
    let long = "z".repeat(100_000);
    for input in [long.as_str(), "???", "12345", "🙂🙂", "!? 42 🙂"] {
        let resolution = router.resolve(input).await;
        assert!(!resolution.answer.is_empty());
        assert!(
            matches!(resolution.stage, Stage::Refused | Stage::Relevance),
            "{} bytes -> {}",
            input.len(),
            resolution.stage
        );
    }
}

#[tokio::test]
async fn test_rule_stages_are_deterministic() {
    let client = Arc::new(MockClient::replying(" unused reply text"));
    let (router, _temp) = router_with(client.clone());

    for input in DETERMINISTIC_INPUTS {
        let first = router.resolve(input).await;
        let second = router.resolve(input).await;

        assert!(first.stage.is_deterministic(), "{} -> {}", input, first.stage);
        assert_eq!(first, second);
    }

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_probe_catalogue_always_answers() {
    let (router, _temp) = router_with(Arc::new(MockClient::replying("")));

    for category in PROBE_CATEGORIES {
        for question in category.questions {
            assert!(!router.route(question).await.is_empty(), "{}", question);
        }
    }
}
