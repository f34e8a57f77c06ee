//! Tool definitions for structured model output.
//!
//! The price-suggestion contract is a fixed three-field object; forcing the
//! model through a single tool call is how that shape is enforced across
//! providers.

use super::types::Tool;

/// Name of the structured-output tool for price suggestions.
pub const PRICE_SUGGESTION_TOOL: &str = "record_price_suggestion";

/// Build the tool whose input schema is the price-suggestion object.
#[must_use]
pub fn price_suggestion_tool() -> Tool {
    Tool {
        name: PRICE_SUGGESTION_TOOL.into(),
        description: "Record the suggested price, unit of measurement, and data source for a building material."
            .into(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "suggestedPrice": {
                    "type": "string",
                    "description": "Suggested price for the material in the specified location based on current market trends"
                },
                "unit": {
                    "type": "string",
                    "description": "The unit of measurement for the suggested price (e.g., per cubic meter, per ton)"
                },
                "source": {
                    "type": "string",
                    "description": "The data source or market trend that was used to provide the suggested price"
                }
            },
            "required": ["suggestedPrice", "unit", "source"]
        }),
    }
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
