//! Chatbot transcript panel with message history and question input.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use contracts::ChatQuestion;

use crate::state::chat::{ChatTranscriptState, Sender};
use crate::util::time::now_ms;

/// Scrollable transcript plus the send form. One question may be in flight
/// at a time; the send button and input disable while awaiting.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let transcript = expect_context::<RwSignal<ChatTranscriptState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message visible.
    Effect::new(move || {
        let _ = transcript.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let accepted = transcript
            .try_update(|t| t.begin_send(&text, now_ms()))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        input.set(String::new());
        spawn_chat_request(transcript, text);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let awaiting = move || transcript.get().is_awaiting_reply();
    let can_send = move || !input.get().trim().is_empty() && !awaiting();

    view! {
        <section class="card chat-panel">
            <header class="card__header">
                <h2 class="card__title">"InfraCost AI Chatbot"</h2>
                <p class="card__description">
                    "Ask me about building materials, processes, or cost estimations."
                </p>
            </header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = transcript.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let bubble_class = match msg.sender {
                                Sender::User => "chat-panel__message chat-panel__message--user",
                                Sender::Assistant => "chat-panel__message chat-panel__message--assistant",
                            };
                            let text = msg.text.clone();
                            view! {
                                <div class=bubble_class>
                                    <p class="chat-panel__text">{text}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    awaiting()
                        .then(|| view! { <div class="chat-panel__message chat-panel__message--pending">"…"</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your question..."
                    prop:value=move || input.get()
                    disabled=awaiting
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// Run one chatbot request to completion; failures become the transcript's
/// fallback message rather than an error state.
fn spawn_chat_request(transcript: RwSignal<ChatTranscriptState>, question: String) {
    #[cfg(feature = "hydrate")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let request = ChatQuestion { question };
            match crate::net::api::ask_chatbot(&request).await {
                Ok(answer) => transcript.update(|t| t.resolve_answer(&answer.answer, now_ms())),
                Err(_) => transcript.update(|t| t.resolve_failure(now_ms())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (transcript, question);
    }
}
