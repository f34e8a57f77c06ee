//! Community forum page.

use leptos::prelude::*;

use crate::components::forum_panel::ForumPanel;

#[component]
pub fn ForumPage() -> impl IntoView {
    view! {
        <div class="page page--forum">
            <ForumPanel/>
        </div>
    }
}
