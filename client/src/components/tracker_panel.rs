//! Price-tracker panel: one-off material price lookups with a result card.

use leptos::prelude::*;

use contracts::PriceSuggestionRequest;

use crate::state::tracker::PriceTrackerState;

#[component]
pub fn TrackerPanel() -> impl IntoView {
    let tracker = expect_context::<RwSignal<PriceTrackerState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = tracker.try_update(PriceTrackerState::begin_lookup).unwrap_or(false);
        if !accepted {
            return;
        }
        let state = tracker.get();
        let request = PriceSuggestionRequest { material: state.material, location: state.location };
        spawn_lookup(tracker, request);
    };

    let loading = move || tracker.get().loading;

    view! {
        <section class="card tracker">
            <header class="card__header">
                <h2 class="card__title">"Local Price Tracker"</h2>
                <p class="card__description">
                    "Get AI-powered material price suggestions for your area based on current market trends."
                </p>
            </header>

            <form class="tracker__form" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Material Name"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., Cement, Steel Rebar"
                        prop:value=move || tracker.get().material
                        disabled=loading
                        on:input=move |ev| tracker.update(|t| t.material = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Project Location"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., New York City, NY"
                        prop:value=move || tracker.get().location
                        disabled=loading
                        on:input=move |ev| tracker.update(|t| t.location = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Searching..." } else { "Get Price Suggestion" }}
                </button>
            </form>

            {move || {
                tracker
                    .get()
                    .error
                    .map(|text| view! { <p class="tracker__error">{text}</p> })
            }}

            {move || {
                tracker
                    .get()
                    .result
                    .map(|suggestion| {
                        view! {
                            <div class="card tracker__result">
                                <h3 class="card__title">"Price Suggestion Result"</h3>
                                <dl class="tracker__fields">
                                    <dt>"Suggested Price"</dt>
                                    <dd class="tracker__price">{suggestion.suggested_price}</dd>
                                    <dt>"Unit"</dt>
                                    <dd>{suggestion.unit}</dd>
                                    <dt>"Source / Market Trend"</dt>
                                    <dd>{suggestion.source}</dd>
                                </dl>
                                <p class="tracker__disclaimer">
                                    "Note: This is an AI-generated suggestion based on available data and may \
                                     not reflect exact local prices. Always verify with local suppliers."
                                </p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

fn spawn_lookup(tracker: RwSignal<PriceTrackerState>, request: PriceSuggestionRequest) {
    #[cfg(feature = "hydrate")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::net::api::request_price_suggestion(&request).await {
                Ok(suggestion) => tracker.update(|t| t.resolve(suggestion)),
                Err(_) => tracker.update(PriceTrackerState::fail),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tracker, request);
    }
}
