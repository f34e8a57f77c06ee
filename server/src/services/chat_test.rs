use super::*;
use crate::llm::types::{ChatResponse, ContentBlock, LlmError, Tool};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

struct MockLlm {
    responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
    calls: AtomicUsize,
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

fn mock(responses: Vec<Result<ChatResponse, LlmError>>) -> Arc<dyn LlmChat> {
    Arc::new(MockLlm { responses: Mutex::new(responses), calls: AtomicUsize::new(0) })
}

fn text_response(parts: &[&str]) -> ChatResponse {
    ChatResponse {
        content: parts
            .iter()
            .map(|t| ContentBlock::Text { text: (*t).into() })
            .collect(),
        model: "mock".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 0,
        output_tokens: 0,
    }
}

#[tokio::test]
async fn returns_joined_text_answer() {
    let llm = mock(vec![Ok(text_response(&["Rebar is steel", "used to reinforce concrete."]))]);
    let answer = answer_question(&llm, &ChatQuestion { question: "What is rebar?".into() })
        .await
        .unwrap();
    assert_eq!(answer.answer, "Rebar is steel\nused to reinforce concrete.");
}

#[tokio::test]
async fn blank_question_rejected_before_backend_call() {
    let inner = Arc::new(MockLlm { responses: Mutex::new(vec![]), calls: AtomicUsize::new(0) });
    let llm: Arc<dyn LlmChat> = inner.clone();
    let err = answer_question(&llm, &ChatQuestion { question: "  ".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Invalid(ContractError::MissingQuestion)));
    assert_eq!(inner.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_text_is_empty_answer_error() {
    let llm = mock(vec![Ok(text_response(&[]))]);
    let err = answer_question(&llm, &ChatQuestion { question: "What is rebar?".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::EmptyAnswer));
}

#[tokio::test]
async fn backend_failure_propagates() {
    let llm = mock(vec![Err(LlmError::ApiRequest("connection reset".into()))]);
    let err = answer_question(&llm, &ChatQuestion { question: "What is rebar?".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Llm(_)));
}
