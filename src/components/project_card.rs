//! Project Card Component

use card_order::CardItem;
use leptos::prelude::*;

use crate::markdown::render_inline;

/// A single card: title, Markdown description, tags and optional link
#[component]
pub fn ProjectCard(
    item: CardItem,
    /// Set right after a drag so the release does not count as a click
    suppress_click: ReadSignal<bool>,
) -> impl IntoView {
    let (selected, set_selected) = signal(false);
    let description = render_inline(&item.description);

    let on_click = move |_| {
        if suppress_click.get_untracked() { return; }
        set_selected.update(|v| *v = !*v);
    };

    view! {
        <article
            class=move || if selected.get() { "card selected" } else { "card" }
            on:click=on_click
        >
            <h3 class="card__title">{item.title}</h3>
            <p class="card__description" inner_html=description></p>
            {(!item.tags.is_empty()).then(|| view! {
                <ul class="card__tags">
                    {item.tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                </ul>
            })}
            {item.link.map(|href| view! {
                <a class="card__link" href=href>"Read the case study"</a>
            })}
        </article>
    }
}
