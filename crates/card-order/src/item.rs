//! Card Item
//!
//! A single card on a board. Only `id` matters to ordering.

use serde::{Deserialize, Serialize};

/// Card data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    /// Stable identifier, unique within one card set
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl CardItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            link: None,
        }
    }
}

/// Ids of `items` in order
pub fn ids_of(items: &[CardItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}
