//! Cost-calculator state: material line items and AI price reconciliation.
//!
//! DESIGN
//! ======
//! Items live in an ordered `Vec`; every mutation flows through the
//! operations below, and `total` is recomputed whenever quantity or price
//! changes so it can never desync from its inputs. Each row carries a
//! request generation: a price response is applied only if its generation
//! still matches the row's current one, so a stale response cannot
//! overwrite a newer request's result.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use contracts::PriceSuggestion;

// =============================================================================
// UNITS
// =============================================================================

/// Fixed unit set for material quantities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    SqFt,
    CubicMeter,
    Kg,
    Ton,
    Item,
    LengthM,
    LengthFt,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::SqFt,
        Unit::CubicMeter,
        Unit::Kg,
        Unit::Ton,
        Unit::Item,
        Unit::LengthM,
        Unit::LengthFt,
    ];

    /// Display label, matching the select options in the UI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Unit::SqFt => "sq ft",
            Unit::CubicMeter => "cubic meter",
            Unit::Kg => "kg",
            Unit::Ton => "ton",
            Unit::Item => "item",
            Unit::LengthM => "length (m)",
            Unit::LengthFt => "length (ft)",
        }
    }

    /// Parse a display label back into a unit.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.label() == label)
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// One row in the cost calculator.
#[derive(Clone, Debug)]
pub struct MaterialItem {
    /// Opaque identity, stable for the row's lifetime, never reused.
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub price_per_unit: f64,
    /// Always `quantity * price_per_unit` after any mutation settles.
    pub total: f64,
    /// True exactly while a price request for this row is in flight.
    pub awaiting_price: bool,
    /// Bumped per price request; responses carrying an older generation
    /// are discarded.
    price_generation: u64,
}

/// Rejections reported by the validating operations. No state is mutated
/// when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("please fill in a material name")]
    MissingName,
    #[error("quantity must be a positive number")]
    InvalidQuantity,
    #[error("price must be a non-negative number")]
    InvalidPrice,
    #[error("please enter your project location to get AI price suggestions")]
    MissingLocation,
    #[error("please enter a material name for AI price suggestion")]
    MissingMaterial,
    #[error("item not found")]
    UnknownItem,
}

/// A single-field mutation applied by [`CostCalculatorState::update_item`].
#[derive(Clone, Debug)]
pub enum ItemUpdate {
    Name(String),
    Quantity(f64),
    Unit(Unit),
    PricePerUnit(f64),
}

/// Result of reconciling one AI price response against a row.
#[derive(Clone, Debug, PartialEq)]
pub enum PriceOutcome {
    /// A finite number was extracted and the row's price updated.
    Applied(f64),
    /// No finite number in the suggestion text; price left untouched.
    Unparsed,
    /// The response belongs to a superseded request (or a deleted row)
    /// and was discarded.
    Stale,
}

/// Identity allocator for rows. Monotonic counter, never reused.
#[derive(Clone, Debug, Default)]
pub struct ItemIds {
    next: u64,
}

impl ItemIds {
    pub fn next_id(&mut self) -> String {
        self.next += 1;
        format!("item-{}", self.next)
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Ordered collection of material line items plus the identity allocator.
#[derive(Clone, Debug, Default)]
pub struct CostCalculatorState {
    pub items: Vec<MaterialItem>,
    ids: ItemIds,
}

impl CostCalculatorState {
    /// Append a new row.
    ///
    /// # Errors
    ///
    /// Rejects a blank name, a non-finite or non-positive quantity, and a
    /// non-finite or negative price. Nothing is mutated on rejection.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity: f64,
        unit: Unit,
        price_per_unit: f64,
    ) -> Result<String, CalculatorError> {
        if name.trim().is_empty() {
            return Err(CalculatorError::MissingName);
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CalculatorError::InvalidQuantity);
        }
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err(CalculatorError::InvalidPrice);
        }

        let id = self.ids.next_id();
        self.items.push(MaterialItem {
            id: id.clone(),
            name: name.to_owned(),
            quantity,
            unit,
            price_per_unit,
            total: quantity * price_per_unit,
            awaiting_price: false,
            price_generation: 0,
        });
        Ok(id)
    }

    /// Remove the row with this identity. No-op if absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Mutate one field of the row with this identity. No-op if absent.
    ///
    /// Quantity and price updates recompute `total` from the post-mutation
    /// value and the other field's current value. Values are NOT
    /// re-validated here: an edit can drive a row degenerate (negative or
    /// NaN), which the display renders as invalid rather than crashing.
    pub fn update_item(&mut self, id: &str, update: ItemUpdate) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        match update {
            ItemUpdate::Name(name) => item.name = name,
            ItemUpdate::Unit(unit) => item.unit = unit,
            ItemUpdate::Quantity(quantity) => {
                item.quantity = quantity;
                item.total = item.quantity * item.price_per_unit;
            }
            ItemUpdate::PricePerUnit(price) => {
                item.price_per_unit = price;
                item.total = item.quantity * item.price_per_unit;
            }
        }
    }

    /// Start an AI price request for a row.
    ///
    /// Returns the request generation to hand back to
    /// [`apply_price_suggestion`](Self::apply_price_suggestion) /
    /// [`fail_price_request`](Self::fail_price_request).
    ///
    /// # Errors
    ///
    /// Rejects a blank location or material before any mutation, matching
    /// the validation order of the form.
    pub fn begin_price_request(
        &mut self,
        id: &str,
        material: &str,
        location: &str,
    ) -> Result<u64, CalculatorError> {
        if location.trim().is_empty() {
            return Err(CalculatorError::MissingLocation);
        }
        if material.trim().is_empty() {
            return Err(CalculatorError::MissingMaterial);
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CalculatorError::UnknownItem)?;

        item.awaiting_price = true;
        item.price_generation += 1;
        Ok(item.price_generation)
    }

    /// Reconcile a successful price response against a row.
    ///
    /// Clears `awaiting_price` on every non-stale path; the suggestion's
    /// text fields are the caller's to display regardless of outcome.
    pub fn apply_price_suggestion(
        &mut self,
        id: &str,
        generation: u64,
        suggestion: &PriceSuggestion,
    ) -> PriceOutcome {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return PriceOutcome::Stale;
        };
        if item.price_generation != generation {
            return PriceOutcome::Stale;
        }

        item.awaiting_price = false;
        match parse_price_text(&suggestion.suggested_price) {
            Some(value) => {
                item.price_per_unit = value;
                item.total = item.quantity * item.price_per_unit;
                PriceOutcome::Applied(value)
            }
            None => PriceOutcome::Unparsed,
        }
    }

    /// Terminate a failed price request: clear `awaiting_price` when the
    /// generation still matches. Price fields are never touched.
    pub fn fail_price_request(&mut self, id: &str, generation: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            if item.price_generation == generation {
                item.awaiting_price = false;
            }
        }
    }

    /// Sum of every row's total. Derived on every call, never cached.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|item| item.total).sum()
    }

    /// Look up a row by identity.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&MaterialItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

// =============================================================================
// PRICE TEXT PARSING
// =============================================================================

/// Extract a number from a price string like "$12.50" by stripping every
/// character that is not a digit, decimal point, or minus sign and parsing
/// the remainder as `f64`.
#[must_use]
pub fn parse_price_text(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let value = cleaned.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
