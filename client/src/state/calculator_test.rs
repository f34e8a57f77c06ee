use super::*;

fn suggestion(price: &str) -> PriceSuggestion {
    PriceSuggestion {
        suggested_price: price.into(),
        unit: "per cubic meter".into(),
        source: "regional market survey".into(),
    }
}

fn state_with_item() -> (CostCalculatorState, String) {
    let mut state = CostCalculatorState::default();
    let id = state
        .add_item("Concrete", 10.0, Unit::CubicMeter, 50.0)
        .unwrap();
    (state, id)
}

// =============================================================
// add_item
// =============================================================

#[test]
fn add_item_appends_row_with_derived_total() {
    let (state, id) = state_with_item();
    assert_eq!(state.items.len(), 1);
    let item = state.item(&id).unwrap();
    assert_eq!(item.name, "Concrete");
    assert_eq!(item.unit, Unit::CubicMeter);
    assert!((item.total - 500.0).abs() < f64::EPSILON);
    assert!(!item.awaiting_price);
}

#[test]
fn add_item_rejects_blank_name() {
    let mut state = CostCalculatorState::default();
    let err = state.add_item("  ", 1.0, Unit::Item, 1.0).unwrap_err();
    assert_eq!(err, CalculatorError::MissingName);
    assert!(state.items.is_empty());
}

#[test]
fn add_item_rejects_zero_or_negative_quantity() {
    let mut state = CostCalculatorState::default();
    assert_eq!(state.add_item("Sand", 0.0, Unit::Ton, 1.0).unwrap_err(), CalculatorError::InvalidQuantity);
    assert_eq!(state.add_item("Sand", -2.0, Unit::Ton, 1.0).unwrap_err(), CalculatorError::InvalidQuantity);
    assert_eq!(
        state.add_item("Sand", f64::NAN, Unit::Ton, 1.0).unwrap_err(),
        CalculatorError::InvalidQuantity
    );
    assert!(state.items.is_empty());
}

#[test]
fn add_item_rejects_negative_or_non_finite_price() {
    let mut state = CostCalculatorState::default();
    assert_eq!(state.add_item("Sand", 1.0, Unit::Ton, -0.5).unwrap_err(), CalculatorError::InvalidPrice);
    assert_eq!(
        state.add_item("Sand", 1.0, Unit::Ton, f64::INFINITY).unwrap_err(),
        CalculatorError::InvalidPrice
    );
    assert!(state.items.is_empty());
}

#[test]
fn add_item_accepts_zero_price() {
    let mut state = CostCalculatorState::default();
    let id = state.add_item("Fill dirt", 3.0, Unit::Ton, 0.0).unwrap();
    assert!((state.item(&id).unwrap().total).abs() < f64::EPSILON);
}

#[test]
fn item_ids_are_unique_and_never_reused() {
    let mut state = CostCalculatorState::default();
    let first = state.add_item("A", 1.0, Unit::Item, 1.0).unwrap();
    state.remove_item(&first);
    let second = state.add_item("B", 1.0, Unit::Item, 1.0).unwrap();
    assert_ne!(first, second);
}

// =============================================================
// remove_item / update_item
// =============================================================

#[test]
fn remove_item_absent_id_is_noop() {
    let (mut state, _) = state_with_item();
    state.remove_item("item-999");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn update_quantity_recomputes_total_with_current_price() {
    let (mut state, id) = state_with_item();
    state.update_item(&id, ItemUpdate::Quantity(4.0));
    let item = state.item(&id).unwrap();
    assert!((item.total - 200.0).abs() < f64::EPSILON);
}

#[test]
fn update_price_recomputes_total_with_current_quantity() {
    let (mut state, id) = state_with_item();
    state.update_item(&id, ItemUpdate::PricePerUnit(2.5));
    let item = state.item(&id).unwrap();
    assert!((item.total - 25.0).abs() < f64::EPSILON);
}

#[test]
fn update_name_and_unit_leave_total_unchanged() {
    let (mut state, id) = state_with_item();
    state.update_item(&id, ItemUpdate::Name("Ready-mix".into()));
    state.update_item(&id, ItemUpdate::Unit(Unit::Ton));
    let item = state.item(&id).unwrap();
    assert_eq!(item.name, "Ready-mix");
    assert_eq!(item.unit, Unit::Ton);
    assert!((item.total - 500.0).abs() < f64::EPSILON);
}

#[test]
fn update_item_absent_id_is_noop() {
    let (mut state, id) = state_with_item();
    state.update_item("item-999", ItemUpdate::Quantity(1.0));
    assert!((state.item(&id).unwrap().total - 500.0).abs() < f64::EPSILON);
}

#[test]
fn edits_are_not_revalidated_and_degenerate_rows_are_allowed() {
    let (mut state, id) = state_with_item();
    state.update_item(&id, ItemUpdate::Quantity(f64::NAN));
    assert!(state.item(&id).unwrap().total.is_nan());
    state.update_item(&id, ItemUpdate::Quantity(2.0));
    state.update_item(&id, ItemUpdate::PricePerUnit(-3.0));
    assert!((state.item(&id).unwrap().total + 6.0).abs() < f64::EPSILON);
}

// =============================================================
// total_cost
// =============================================================

#[test]
fn total_cost_tracks_add_update_remove() {
    let mut state = CostCalculatorState::default();
    let a = state.add_item("A", 2.0, Unit::Item, 10.0).unwrap();
    let b = state.add_item("B", 1.0, Unit::Kg, 5.0).unwrap();
    assert!((state.total_cost() - 25.0).abs() < f64::EPSILON);

    state.update_item(&a, ItemUpdate::Quantity(3.0));
    assert!((state.total_cost() - 35.0).abs() < f64::EPSILON);

    state.remove_item(&b);
    assert!((state.total_cost() - 30.0).abs() < f64::EPSILON);

    state.remove_item(&a);
    assert!(state.total_cost().abs() < f64::EPSILON);
}

// =============================================================
// parse_price_text
// =============================================================

#[test]
fn parse_price_strips_currency_formatting() {
    assert_eq!(parse_price_text("$12.50"), Some(12.50));
    assert_eq!(parse_price_text("USD 1,200"), Some(1200.0));
    assert_eq!(parse_price_text("approx. $85 per ton"), Some(0.85));
}

#[test]
fn parse_price_rejects_text_without_numbers() {
    assert_eq!(parse_price_text("contact supplier"), None);
    assert_eq!(parse_price_text(""), None);
    assert_eq!(parse_price_text("$-"), None);
}

// =============================================================
// AI price request lifecycle
// =============================================================

#[test]
fn begin_price_request_rejects_blank_location_without_mutation() {
    let (mut state, id) = state_with_item();
    let err = state.begin_price_request(&id, "Concrete", "  ").unwrap_err();
    assert_eq!(err, CalculatorError::MissingLocation);
    assert!(!state.item(&id).unwrap().awaiting_price);
}

#[test]
fn begin_price_request_rejects_blank_material() {
    let (mut state, id) = state_with_item();
    let err = state.begin_price_request(&id, "", "Austin, TX").unwrap_err();
    assert_eq!(err, CalculatorError::MissingMaterial);
    assert!(!state.item(&id).unwrap().awaiting_price);
}

#[test]
fn begin_price_request_sets_awaiting_flag() {
    let (mut state, id) = state_with_item();
    let generation = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();
    assert!(state.item(&id).unwrap().awaiting_price);
    assert_eq!(generation, 1);
}

#[test]
fn apply_parsable_suggestion_updates_price_and_total() {
    let (mut state, id) = state_with_item();
    let generation = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();

    let outcome = state.apply_price_suggestion(&id, generation, &suggestion("$12.50"));
    assert_eq!(outcome, PriceOutcome::Applied(12.50));

    let item = state.item(&id).unwrap();
    assert!((item.price_per_unit - 12.50).abs() < f64::EPSILON);
    assert!((item.total - 125.0).abs() < f64::EPSILON);
    assert!(!item.awaiting_price);
}

#[test]
fn apply_unparsable_suggestion_leaves_price_untouched() {
    let (mut state, id) = state_with_item();
    let generation = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();

    let outcome = state.apply_price_suggestion(&id, generation, &suggestion("contact supplier"));
    assert_eq!(outcome, PriceOutcome::Unparsed);

    let item = state.item(&id).unwrap();
    assert!((item.price_per_unit - 50.0).abs() < f64::EPSILON);
    assert!(!item.awaiting_price);
}

#[test]
fn fail_price_request_clears_awaiting_only() {
    let (mut state, id) = state_with_item();
    let generation = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();
    state.fail_price_request(&id, generation);
    let item = state.item(&id).unwrap();
    assert!(!item.awaiting_price);
    assert!((item.price_per_unit - 50.0).abs() < f64::EPSILON);
}

#[test]
fn stale_response_is_discarded_and_newer_response_wins() {
    let (mut state, id) = state_with_item();
    let first = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();
    // Second request issued before the first resolves.
    let second = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();
    assert_ne!(first, second);

    // Newer response lands first.
    let outcome = state.apply_price_suggestion(&id, second, &suggestion("$20"));
    assert_eq!(outcome, PriceOutcome::Applied(20.0));
    assert!(!state.item(&id).unwrap().awaiting_price);

    // The late first response must not overwrite it.
    let outcome = state.apply_price_suggestion(&id, first, &suggestion("$99"));
    assert_eq!(outcome, PriceOutcome::Stale);
    assert!((state.item(&id).unwrap().price_per_unit - 20.0).abs() < f64::EPSILON);
}

#[test]
fn stale_failure_does_not_clear_newer_requests_flag() {
    let (mut state, id) = state_with_item();
    let first = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();
    let second = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();

    state.fail_price_request(&id, first);
    assert!(state.item(&id).unwrap().awaiting_price, "newer request is still in flight");

    state.fail_price_request(&id, second);
    assert!(!state.item(&id).unwrap().awaiting_price);
}

#[test]
fn response_for_removed_row_is_stale() {
    let (mut state, id) = state_with_item();
    let generation = state
        .begin_price_request(&id, "Concrete", "Austin, TX")
        .unwrap();
    state.remove_item(&id);
    let outcome = state.apply_price_suggestion(&id, generation, &suggestion("$10"));
    assert_eq!(outcome, PriceOutcome::Stale);
}

// =============================================================
// Unit labels
// =============================================================

#[test]
fn unit_labels_round_trip() {
    for unit in Unit::ALL {
        assert_eq!(Unit::from_label(unit.label()), Some(unit));
    }
    assert_eq!(Unit::from_label("parsec"), None);
}
