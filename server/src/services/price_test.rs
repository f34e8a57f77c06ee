use super::*;
use crate::llm::types::{ChatResponse, ContentBlock, LlmError, Tool};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
    calls: AtomicUsize,
}

impl MockLlm {
    fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Arc<dyn LlmChat> {
        Arc::new(Self { responses: Mutex::new(responses), calls: AtomicUsize::new(0) })
    }
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(
        &self,
        _max_tokens: u32,
        _system: &str,
        _messages: &[Message],
        _tools: Option<&[Tool]>,
    ) -> Result<ChatResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.lock().unwrap().remove(0)
    }
}

fn tool_response(input: serde_json::Value) -> ChatResponse {
    ChatResponse {
        content: vec![ContentBlock::ToolUse { id: "tu_1".into(), name: PRICE_SUGGESTION_TOOL.into(), input }],
        model: "mock".into(),
        stop_reason: "tool_use".into(),
        input_tokens: 0,
        output_tokens: 0,
    }
}

fn text_response(text: &str) -> ChatResponse {
    ChatResponse {
        content: vec![ContentBlock::Text { text: text.into() }],
        model: "mock".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 0,
        output_tokens: 0,
    }
}

fn request() -> PriceSuggestionRequest {
    PriceSuggestionRequest { material: "Cement".into(), location: "Austin, TX".into() }
}

// =========================================================================
// suggest_price
// =========================================================================

#[tokio::test]
async fn returns_suggestion_from_tool_input() {
    let llm = MockLlm::new(vec![Ok(tool_response(serde_json::json!({
        "suggestedPrice": "$12.50",
        "unit": "per bag",
        "source": "regional supplier index"
    })))]);
    let suggestion = suggest_price(&llm, &request()).await.unwrap();
    assert_eq!(suggestion.suggested_price, "$12.50");
    assert_eq!(suggestion.unit, "per bag");
    assert_eq!(suggestion.source, "regional supplier index");
}

#[tokio::test]
async fn text_only_response_is_malformed() {
    let llm = MockLlm::new(vec![Ok(text_response("around twelve dollars"))]);
    let err = suggest_price(&llm, &request()).await.unwrap_err();
    assert!(matches!(err, PriceError::MalformedOutput(_)));
}

#[tokio::test]
async fn tool_input_missing_field_is_malformed() {
    let llm = MockLlm::new(vec![Ok(tool_response(serde_json::json!({
        "suggestedPrice": "$12.50",
        "unit": "per bag"
    })))]);
    let err = suggest_price(&llm, &request()).await.unwrap_err();
    assert!(matches!(err, PriceError::MalformedOutput(_)));
}

#[tokio::test]
async fn blank_material_rejected_before_backend_call() {
    let mock = Arc::new(MockLlm { responses: Mutex::new(vec![]), calls: AtomicUsize::new(0) });
    let llm: Arc<dyn LlmChat> = mock.clone();
    let bad = PriceSuggestionRequest { material: "  ".into(), location: "Austin, TX".into() };
    let err = suggest_price(&llm, &bad).await.unwrap_err();
    assert!(matches!(err, PriceError::Invalid(ContractError::MissingMaterial)));
    assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn backend_failure_propagates_undifferentiated() {
    let llm = MockLlm::new(vec![Err(LlmError::ApiResponse { status: 529, body: "overloaded".into() })]);
    let err = suggest_price(&llm, &request()).await.unwrap_err();
    assert!(matches!(err, PriceError::Llm(_)));
}

// =========================================================================
// prompt building
// =========================================================================

#[test]
fn user_prompt_embeds_both_fields() {
    let prompt = build_user_prompt(&request());
    assert!(prompt.contains("Material: Cement"));
    assert!(prompt.contains("Location: Austin, TX"));
    assert!(prompt.contains("unit of measurement"));
}
