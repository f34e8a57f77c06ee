//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side: stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed request degrades to the
//! state containers' failure paths without crashing the view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contracts::{ChatAnswer, ChatQuestion, PriceSuggestion, PriceSuggestionRequest};

pub(crate) const PRICE_SUGGESTION_ENDPOINT: &str = "/api/price-suggestion";
pub(crate) const CHAT_ENDPOINT: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Request an AI price suggestion via `POST /api/price-suggestion`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_price_suggestion(request: &PriceSuggestionRequest) -> Result<PriceSuggestion, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(PRICE_SUGGESTION_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<PriceSuggestion>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Ask the chatbot a question via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn ask_chatbot(request: &ChatQuestion) -> Result<ChatAnswer, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<ChatAnswer>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
