//! Portfolio Frontend App
//!
//! Navigation plus the home, projects and skills pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CardBoard, SiteNav};
use crate::config::{BoardConfig, SiteConfig};
use crate::store::{store_page, store_set_top_project, store_top_project, use_site_store, Page, SiteState};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(SiteState::default()));
    let store = use_site_store();

    let site = match SiteConfig::embedded() {
        Ok(site) => site,
        Err(e) => {
            tracing::error!(error = %e, "board config rejected");
            SiteConfig { boards: Vec::new() }
        }
    };
    let projects = site.board("projects").ok().cloned();
    let skills = site.board("skills").ok().cloned();

    view! {
        <div class="site-layout">
            <SiteNav />
            <main class="site-main">
                {move || match store_page(&store) {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Projects => view! { <ProjectsPage board=projects.clone() /> }.into_any(),
                    Page::Skills => view! { <SkillsPage board=skills.clone() /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Front-end developer"</h1>
            <p>"I build accessible, fast interfaces and the component libraries behind them."</p>
        </section>
    }
}

#[component]
fn MissingBoard() -> impl IntoView {
    view! { <p class="board-missing">"Nothing to show here yet."</p> }
}

#[component]
fn ProjectsPage(board: Option<BoardConfig>) -> impl IntoView {
    let store = use_site_store();
    let Some(board) = board else {
        return view! { <MissingBoard /> }.into_any();
    };

    let lookup = board.clone();
    let on_order_change = Callback::new(move |order: Vec<String>| {
        store_set_top_project(&store, lookup.top_title(&order));
    });

    view! {
        <div class="projects-page">
            <CardBoard board=board on_order_change=on_order_change />
            {move || store_top_project(&store).map(|title| view! {
                <p class="top-pick">"Your top pick: " <strong>{title}</strong></p>
            })}
        </div>
    }
    .into_any()
}

#[component]
fn SkillsPage(board: Option<BoardConfig>) -> impl IntoView {
    match board {
        Some(board) => view! { <CardBoard board=board /> }.into_any(),
        None => view! { <MissingBoard /> }.into_any(),
    }
}
