//! Site Navigation

use leptos::prelude::*;

use crate::store::{store_page, store_set_page, use_site_store, Page};

#[component]
pub fn SiteNav() -> impl IntoView {
    let store = use_site_store();

    view! {
        <nav class="site-nav">
            <span class="site-nav__brand">"Portfolio"</span>
            {Page::ALL.into_iter().map(|page| {
                let class = move || {
                    if store_page(&store) == page { "site-nav__link active" } else { "site-nav__link" }
                };
                view! {
                    <button class=class on:click=move |_| store_set_page(&store, page)>
                        {page.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
