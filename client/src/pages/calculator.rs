//! Cost calculator page (home).

use leptos::prelude::*;

use crate::components::calculator_panel::CalculatorPanel;

#[component]
pub fn CalculatorPage() -> impl IntoView {
    view! {
        <div class="page page--calculator">
            <CalculatorPanel/>
        </div>
    }
}
