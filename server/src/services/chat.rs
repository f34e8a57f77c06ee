//! Chatbot answer service — free-text question → free-text answer.

use std::sync::Arc;

use contracts::{ChatAnswer, ChatQuestion, ContractError};
use tracing::info;

use crate::llm::LlmChat;
use crate::llm::types::{Content, Message};

const SYSTEM_PROMPT: &str = "You are a chatbot that answers questions about building materials and processes.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("invalid request: {0}")]
    Invalid(#[from] ContractError),
    #[error("LLM error: {0}")]
    Llm(#[from] crate::llm::types::LlmError),
    /// The model responded with no text content at all.
    #[error("model returned an empty answer")]
    EmptyAnswer,
}

// =============================================================================
// SERVICE
// =============================================================================

/// Answer a free-text question about building materials.
///
/// # Errors
///
/// Returns [`ChatError::Invalid`] for a blank question (before any backend
/// call), [`ChatError::Llm`] for backend failures, and
/// [`ChatError::EmptyAnswer`] when the response carries no text.
pub async fn answer_question(llm: &Arc<dyn LlmChat>, request: &ChatQuestion) -> Result<ChatAnswer, ChatError> {
    request.validate()?;
    info!(question_len = request.question.len(), "chat: question received");

    let messages = [Message {
        role: "user".into(),
        content: Content::Text(format!("Question: {}\nAnswer:", request.question)),
    }];

    let response = llm
        .chat(super::ai_max_tokens(), SYSTEM_PROMPT, &messages, None)
        .await?;

    let answer = response.joined_text();
    if answer.trim().is_empty() {
        return Err(ChatError::EmptyAnswer);
    }

    info!(
        answer_len = answer.len(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "chat: answer complete"
    );
    Ok(ChatAnswer { answer })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
