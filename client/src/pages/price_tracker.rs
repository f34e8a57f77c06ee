//! Local price tracker page.

use leptos::prelude::*;

use crate::components::tracker_panel::TrackerPanel;

#[component]
pub fn PriceTrackerPage() -> impl IntoView {
    view! {
        <div class="page page--tracker">
            <TrackerPanel/>
        </div>
    }
}
