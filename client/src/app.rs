//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::{
    calculator::CalculatorPage, chatbot::ChatbotPage, forum::ForumPage, price_tracker::PriceTrackerPage,
};
use crate::state::calculator::CostCalculatorState;
use crate::state::chat::ChatTranscriptState;
use crate::state::tracker::PriceTrackerState;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// State survives navigation between pages because the signals live here,
/// above the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let calculator = RwSignal::new(CostCalculatorState::default());
    let transcript = RwSignal::new(ChatTranscriptState::default());
    let tracker = RwSignal::new(PriceTrackerState::default());

    provide_context(calculator);
    provide_context(transcript);
    provide_context(tracker);

    view! {
        <Stylesheet id="infracost" href="/pkg/infracost.css"/>
        <Title text="InfraCost"/>

        <Router>
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CalculatorPage/>
                        <Route path=StaticSegment("price-tracker") view=PriceTrackerPage/>
                        <Route path=StaticSegment("chatbot") view=ChatbotPage/>
                        <Route path=StaticSegment("forum") view=ForumPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
