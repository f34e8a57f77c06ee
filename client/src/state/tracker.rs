//! Price-tracker page state: one-off material price lookups.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use contracts::PriceSuggestion;

/// Error banner text shown when a lookup fails.
pub const LOOKUP_FAILED: &str = "Failed to fetch price suggestion. Please try again.";

/// State for the standalone price-tracker form and its result card.
///
/// The result lives only until the next lookup supersedes it or the view
/// unmounts.
#[derive(Clone, Debug, Default)]
pub struct PriceTrackerState {
    pub material: String,
    pub location: String,
    pub loading: bool,
    pub result: Option<PriceSuggestion>,
    pub error: Option<String>,
}

impl PriceTrackerState {
    /// Start a lookup. Returns `false` (no mutation) when either field is
    /// blank or a lookup is already running; otherwise clears the previous
    /// result/error and marks loading.
    pub fn begin_lookup(&mut self) -> bool {
        if self.material.trim().is_empty() || self.location.trim().is_empty() || self.loading {
            return false;
        }
        self.loading = true;
        self.result = None;
        self.error = None;
        true
    }

    /// Record a successful lookup.
    pub fn resolve(&mut self, suggestion: PriceSuggestion) {
        self.loading = false;
        self.result = Some(suggestion);
    }

    /// Record a failed lookup.
    pub fn fail(&mut self) {
        self.loading = false;
        self.error = Some(LOOKUP_FAILED.to_owned());
    }
}
