//! Navigation sidebar shared by every page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("/", "Calculator"),
    ("/price-tracker", "Price Tracker"),
    ("/chatbot", "AI Chatbot"),
    ("/forum", "Forum"),
];

/// Vertical navigation rail with the app logo and page links.
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <a class="sidebar__logo" href="/">
                "InfraCost"
            </a>
            <ul class="sidebar__menu">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        let is_active = move || location.pathname.get() == href;
                        view! {
                            <li class="sidebar__item">
                                <a
                                    class="sidebar__link"
                                    class=("sidebar__link--active", is_active)
                                    href=href
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
