//! Cost-calculator panel: add-item form, editable material table, and the
//! per-row AI price button.
//!
//! All mutation goes through [`CostCalculatorState`] operations; this
//! component only translates DOM events and spawns the async price
//! requests.

use leptos::prelude::*;

use contracts::PriceSuggestionRequest;

use crate::state::calculator::{CostCalculatorState, ItemUpdate, Unit};
#[cfg(feature = "hydrate")]
use crate::state::calculator::PriceOutcome;
use crate::util::money::format_usd;

/// Parse a numeric form field the way the browser would: empty or invalid
/// input becomes NaN and is caught by validation downstream.
fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[component]
pub fn CalculatorPanel() -> impl IntoView {
    let calculator = expect_context::<RwSignal<CostCalculatorState>>();

    let location = RwSignal::new(String::new());
    let new_name = RwSignal::new(String::new());
    let new_quantity = RwSignal::new(String::new());
    let new_unit = RwSignal::new(Unit::default());
    let new_price = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    let add_item = move |_| {
        let result = calculator.try_update(|c| {
            c.add_item(
                &new_name.get(),
                parse_field(&new_quantity.get()),
                new_unit.get(),
                parse_field(&new_price.get()),
            )
        });
        match result {
            Some(Ok(_)) => {
                new_name.set(String::new());
                new_quantity.set(String::new());
                new_unit.set(Unit::default());
                new_price.set(String::new());
                notice.set(None);
            }
            Some(Err(e)) => notice.set(Some(e.to_string())),
            None => {}
        }
    };

    let fetch_price = move |id: String, material: String| {
        let loc = location.get();
        let begun = calculator.try_update(|c| c.begin_price_request(&id, &material, &loc));
        match begun {
            Some(Ok(generation)) => {
                let request = PriceSuggestionRequest { material, location: loc };
                spawn_price_request(calculator, notice, id, request, generation);
            }
            Some(Err(e)) => notice.set(Some(e.to_string())),
            None => {}
        }
    };

    view! {
        <section class="card calculator">
            <header class="card__header">
                <h2 class="card__title">"Cost Calculator"</h2>
                <p class="card__description">
                    "Estimate your building infrastructure costs. Add materials and quantities below."
                </p>
            </header>

            <div class="calculator__form">
                <label class="field">
                    <span class="field__label">"Project Location (for AI Price Suggestions)"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., San Francisco, CA"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>

                <div class="calculator__new-item">
                    <label class="field">
                        <span class="field__label">"Material Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder="e.g., Concrete"
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Quantity"</span>
                        <input
                            class="field__input"
                            type="number"
                            placeholder="e.g., 10"
                            prop:value=move || new_quantity.get()
                            on:input=move |ev| new_quantity.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Unit"</span>
                        <select
                            class="field__input"
                            on:change=move |ev| {
                                if let Some(unit) = Unit::from_label(&event_target_value(&ev)) {
                                    new_unit.set(unit);
                                }
                            }
                        >
                            {Unit::ALL
                                .iter()
                                .map(|unit| {
                                    let label = unit.label();
                                    view! {
                                        <option value=label selected=move || new_unit.get().label() == label>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="field">
                        <span class="field__label">"Price per Unit"</span>
                        <input
                            class="field__input"
                            type="number"
                            placeholder="e.g., 50"
                            prop:value=move || new_price.get()
                            on:input=move |ev| new_price.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <button class="btn btn--primary" on:click=add_item>
                    "Add Item"
                </button>

                {move || {
                    notice
                        .get()
                        .map(|text| view! { <p class="calculator__notice">{text}</p> })
                }}
            </div>

            {move || {
                let items = calculator.get().items;
                if items.is_empty() {
                    return view! { <p class="calculator__empty">"No materials yet."</p> }.into_any();
                }

                let rows = items
                    .iter()
                    .map(|item| {
                        let name_id = item.id.clone();
                        let quantity_id = item.id.clone();
                        let unit_id = item.id.clone();
                        let price_id = item.id.clone();
                        let fetch_id = item.id.clone();
                        let remove_id = item.id.clone();
                        let material = item.name.clone();
                        let name = item.name.clone();
                        let unit_label = item.unit.label();
                        let awaiting = item.awaiting_price;

                        view! {
                            <tr class="calculator__row">
                                <td>
                                    <input
                                        class="field__input"
                                        type="text"
                                        prop:value=name
                                        on:input=move |ev| {
                                            calculator.update(|c| {
                                                c.update_item(&name_id, ItemUpdate::Name(event_target_value(&ev)));
                                            });
                                        }
                                    />
                                </td>
                                <td>
                                    <input
                                        class="field__input field__input--narrow"
                                        type="number"
                                        prop:value=item.quantity.to_string()
                                        on:input=move |ev| {
                                            let quantity = parse_field(&event_target_value(&ev));
                                            calculator.update(|c| {
                                                c.update_item(&quantity_id, ItemUpdate::Quantity(quantity));
                                            });
                                        }
                                    />
                                </td>
                                <td>
                                    <select
                                        class="field__input"
                                        on:change=move |ev| {
                                            if let Some(unit) = Unit::from_label(&event_target_value(&ev)) {
                                                calculator.update(|c| {
                                                    c.update_item(&unit_id, ItemUpdate::Unit(unit));
                                                });
                                            }
                                        }
                                    >
                                        {Unit::ALL
                                            .iter()
                                            .map(|unit| {
                                                let label = unit.label();
                                                view! {
                                                    <option value=label selected={unit_label == label}>
                                                        {label}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </td>
                                <td class="calculator__price-cell">
                                    <input
                                        class="field__input field__input--narrow"
                                        type="number"
                                        prop:value=item.price_per_unit.to_string()
                                        on:input=move |ev| {
                                            let price = parse_field(&event_target_value(&ev));
                                            calculator.update(|c| {
                                                c.update_item(&price_id, ItemUpdate::PricePerUnit(price));
                                            });
                                        }
                                    />
                                    <button
                                        class="btn btn--ghost"
                                        title="Get AI Price Suggestion"
                                        disabled=awaiting
                                        on:click=move |_| fetch_price(fetch_id.clone(), material.clone())
                                    >
                                        {if awaiting { "..." } else { "$" }}
                                    </button>
                                </td>
                                <td class="calculator__total-cell">{format_usd(item.total)}</td>
                                <td>
                                    <button
                                        class="btn btn--ghost btn--danger"
                                        on:click=move |_| calculator.update(|c| c.remove_item(&remove_id))
                                    >
                                        "Remove"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <table class="calculator__table">
                        <thead>
                            <tr>
                                <th>"Material"</th>
                                <th>"Quantity"</th>
                                <th>"Unit"</th>
                                <th>"Price/Unit"</th>
                                <th>"Total"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                    .into_any()
            }}

            <footer class="calculator__footer">
                <span class="calculator__grand-total">
                    "Total Estimated Cost: " {move || format_usd(calculator.get().total_cost())}
                </span>
            </footer>
        </section>
    }
}

/// Run one AI price request to completion and reconcile the outcome.
fn spawn_price_request(
    calculator: RwSignal<CostCalculatorState>,
    notice: RwSignal<Option<String>>,
    id: String,
    request: PriceSuggestionRequest,
    generation: u64,
) {
    #[cfg(feature = "hydrate")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::net::api::request_price_suggestion(&request).await {
                Ok(suggestion) => {
                    let outcome = calculator
                        .try_update(|c| c.apply_price_suggestion(&id, generation, &suggestion))
                        .unwrap_or(PriceOutcome::Stale);
                    match outcome {
                        PriceOutcome::Applied(_) => notice.set(Some(format!(
                            "Suggested price for {} is {} per {}. Source: {}",
                            request.material, suggestion.suggested_price, suggestion.unit, suggestion.source
                        ))),
                        PriceOutcome::Unparsed => notice.set(Some(format!(
                            "Could not parse price from AI: {}",
                            suggestion.suggested_price
                        ))),
                        PriceOutcome::Stale => {}
                    }
                }
                Err(_) => {
                    calculator.update(|c| c.fail_price_request(&id, generation));
                    notice.set(Some("Failed to get price suggestion from AI.".to_owned()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (calculator, notice, id, request, generation);
    }
}
