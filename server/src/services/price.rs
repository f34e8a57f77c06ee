//! Price suggestion service — (material, location) → structured suggestion.
//!
//! DESIGN
//! ======
//! Builds a natural-language prompt embedding both fields and forces the
//! model through the `record_price_suggestion` tool so the response is the
//! fixed three-field object. The suggestion text is returned verbatim; no
//! numeric plausibility checks happen here.

use std::sync::Arc;

use contracts::{ContractError, PriceSuggestion, PriceSuggestionRequest};
use tracing::{info, warn};

use crate::llm::LlmChat;
use crate::llm::tools::{PRICE_SUGGESTION_TOOL, price_suggestion_tool};
use crate::llm::types::{Content, Message};

const SYSTEM_PROMPT: &str = "You are an AI assistant that provides price suggestions for building materials \
     based on current market trends in a specific location. Record your answer by calling \
     the record_price_suggestion tool exactly once.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("invalid request: {0}")]
    Invalid(#[from] ContractError),
    #[error("LLM error: {0}")]
    Llm(#[from] crate::llm::types::LlmError),
    /// The model responded without a usable structured suggestion.
    #[error("malformed suggestion output: {0}")]
    MalformedOutput(String),
}

// =============================================================================
// SERVICE
// =============================================================================

/// Request a local price suggestion for a material.
///
/// Stateless and safe to call concurrently for different inputs. Every
/// backend failure surfaces as a single [`PriceError`]; there is no retry
/// and no partial result.
///
/// # Errors
///
/// Returns [`PriceError::Invalid`] for blank fields (before any backend
/// call), [`PriceError::Llm`] for backend failures, and
/// [`PriceError::MalformedOutput`] when the model skips the tool call or
/// its input does not match the contract shape.
pub async fn suggest_price(
    llm: &Arc<dyn LlmChat>,
    request: &PriceSuggestionRequest,
) -> Result<PriceSuggestion, PriceError> {
    request.validate()?;
    info!(material = %request.material, location = %request.location, "price: suggestion requested");

    let tools = [price_suggestion_tool()];
    let messages = [Message { role: "user".into(), content: Content::Text(build_user_prompt(request)) }];

    let response = llm
        .chat(super::ai_max_tokens(), SYSTEM_PROMPT, &messages, Some(&tools))
        .await?;

    let Some(input) = response.tool_input(PRICE_SUGGESTION_TOOL) else {
        warn!(stop_reason = %response.stop_reason, "price: model returned no structured suggestion");
        return Err(PriceError::MalformedOutput("no structured suggestion in response".into()));
    };

    let suggestion: PriceSuggestion =
        serde_json::from_value(input.clone()).map_err(|e| PriceError::MalformedOutput(e.to_string()))?;

    info!(
        suggested_price = %suggestion.suggested_price,
        unit = %suggestion.unit,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "price: suggestion complete"
    );
    Ok(suggestion)
}

pub(crate) fn build_user_prompt(request: &PriceSuggestionRequest) -> String {
    format!(
        "Material: {}\nLocation: {}\n\nProvide a suggested price, unit of measurement, \
         and the data source or market trend used to provide the price.",
        request.material, request.location
    )
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
