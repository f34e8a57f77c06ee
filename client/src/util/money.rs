//! Currency display formatting.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format a dollar amount for display.
///
/// Non-finite or negative totals render as a dash so a degenerate row
/// (driven invalid by an in-place edit) degrades instead of crashing the
/// view.
#[must_use]
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return "–".to_owned();
    }
    format!("${value:.2}")
}
