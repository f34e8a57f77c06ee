//! Community forum listing. Static placeholder content.

use leptos::prelude::*;

use crate::state::forum::seed_topics;

#[component]
pub fn ForumPanel() -> impl IntoView {
    let topics = seed_topics();

    view! {
        <section class="forum">
            <header class="card card__header">
                <h2 class="card__title">"Community Forum"</h2>
                <p class="card__description">
                    "Discuss building costs, materials, and share insights with the community. "
                    <strong>"Note: This forum is currently a placeholder and under development."</strong>
                </p>
            </header>

            <div class="forum__grid">
                {topics
                    .into_iter()
                    .map(|topic| {
                        view! {
                            <article class="card forum__topic">
                                <h3 class="forum__title">{topic.title}</h3>
                                <p class="forum__description">{topic.description}</p>
                                <div class="forum__meta">
                                    <span class="forum__author">{topic.author}</span>
                                    <span class="forum__date">{topic.date}</span>
                                    <span class="forum__replies">{topic.replies} " replies"</span>
                                </div>
                                <div class="forum__tags">
                                    {topic
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="forum__tag">{*tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
