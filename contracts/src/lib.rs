//! Shared API contracts for the InfraCost server and client.
//!
//! This crate owns the request/response shapes for the two AI-backed
//! operations (price suggestion, chatbot answer) so both sides agree on
//! field names and validation. Payloads are plain JSON over REST.

use serde::{Deserialize, Serialize};

/// Error returned by request validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContractError {
    /// `material` is empty or whitespace.
    #[error("material must not be empty")]
    MissingMaterial,
    /// `location` is empty or whitespace.
    #[error("location must not be empty")]
    MissingLocation,
    /// `question` is empty or whitespace.
    #[error("question must not be empty")]
    MissingQuestion,
}

// =============================================================================
// PRICE SUGGESTION
// =============================================================================

/// Request body for `POST /api/price-suggestion`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSuggestionRequest {
    /// Building material to price, e.g. "Cement".
    pub material: String,
    /// Project location, e.g. "New York City, NY".
    pub location: String,
}

impl PriceSuggestionRequest {
    /// Reject blank fields before any backend call is made.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MissingMaterial`] or
    /// [`ContractError::MissingLocation`] for empty/whitespace fields.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.material.trim().is_empty() {
            return Err(ContractError::MissingMaterial);
        }
        if self.location.trim().is_empty() {
            return Err(ContractError::MissingLocation);
        }
        Ok(())
    }
}

/// Response body for `POST /api/price-suggestion`.
///
/// All three fields are free text chosen by the model; the client decides
/// whether a number can be extracted from `suggested_price`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSuggestion {
    /// Suggested price, often currency-formatted ("$12.50").
    pub suggested_price: String,
    /// Unit of measurement the price applies to ("per cubic meter").
    pub unit: String,
    /// Data source or market trend backing the suggestion.
    pub source: String,
}

// =============================================================================
// CHAT
// =============================================================================

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuestion {
    pub question: String,
}

impl ChatQuestion {
    /// # Errors
    ///
    /// Returns [`ContractError::MissingQuestion`] for an empty/whitespace
    /// question.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.question.trim().is_empty() {
            return Err(ContractError::MissingQuestion);
        }
        Ok(())
    }
}

/// Response body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
