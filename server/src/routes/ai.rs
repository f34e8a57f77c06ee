//! AI endpoint handlers.
//!
//! ERROR MAPPING
//! =============
//! Validation failures are 422 before any backend call. A missing LLM
//! client is 503. Every backend failure — network, quota, malformed
//! structured output — maps to a single 502; callers never see which.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::warn;

use contracts::{ChatAnswer, ChatQuestion, PriceSuggestion, PriceSuggestionRequest};

use crate::services::chat::{self, ChatError};
use crate::services::price::{self, PriceError};
use crate::state::AppState;

/// `POST /api/price-suggestion` — AI price suggestion for (material, location).
pub async fn suggest_price(
    State(state): State<AppState>,
    Json(body): Json<PriceSuggestionRequest>,
) -> Result<Json<PriceSuggestion>, StatusCode> {
    let Some(llm) = state.llm.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let suggestion = price::suggest_price(llm, &body)
        .await
        .map_err(price_error_to_status)?;
    Ok(Json(suggestion))
}

/// `POST /api/chat` — chatbot answer for a free-text question.
pub async fn chat_answer(
    State(state): State<AppState>,
    Json(body): Json<ChatQuestion>,
) -> Result<Json<ChatAnswer>, StatusCode> {
    let Some(llm) = state.llm.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let answer = chat::answer_question(llm, &body)
        .await
        .map_err(chat_error_to_status)?;
    Ok(Json(answer))
}

fn price_error_to_status(err: PriceError) -> StatusCode {
    match err {
        PriceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PriceError::Llm(e) => {
            warn!(error = %e, retryable = e.retryable(), "price: suggestion failed");
            StatusCode::BAD_GATEWAY
        }
        PriceError::MalformedOutput(detail) => {
            warn!(%detail, "price: suggestion failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

fn chat_error_to_status(err: ChatError) -> StatusCode {
    match err {
        ChatError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ChatError::Llm(e) => {
            warn!(error = %e, retryable = e.retryable(), "chat: answer failed");
            StatusCode::BAD_GATEWAY
        }
        ChatError::EmptyAnswer => {
            warn!("chat: answer failed: empty response");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;
