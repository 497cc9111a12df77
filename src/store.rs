//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Pages of the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Projects,
    Skills,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Projects, Page::Skills];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
        }
    }
}

/// Global site state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Page currently shown
    pub page: Page,
    /// Project card currently first on the projects board
    pub top_project: Option<String>,
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_page(store: &SiteStore) -> Page {
    store.page().get()
}

pub fn store_set_page(store: &SiteStore, page: Page) {
    store.page().set(page);
}

pub fn store_top_project(store: &SiteStore) -> Option<String> {
    store.top_project().get()
}

pub fn store_set_top_project(store: &SiteStore, title: Option<String>) {
    store.top_project().set(title);
}
