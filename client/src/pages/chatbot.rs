//! AI chatbot page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    view! {
        <div class="page page--chatbot">
            <ChatPanel/>
        </div>
    }
}
