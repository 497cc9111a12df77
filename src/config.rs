//! Site Configuration
//!
//! Card boards and their canonical cards, embedded from `content/boards.json`.

use std::collections::HashSet;

use card_order::{CardItem, CardSetConfig, ConfigError};
use serde::Deserialize;

const BOARDS_JSON: &str = include_str!("../content/boards.json");

fn default_notice_timeout_ms() -> u32 {
    5000
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub boards: Vec<BoardConfig>,
}

/// One reorderable card board
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub enable_persistence: bool,
    #[serde(default)]
    pub storage_key: Option<String>,
    /// Auto-dismiss delay for the "order saved" notice
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u32,
    pub items: Vec<CardItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteConfigError {
    Parse(String),
    DuplicateBoard(String),
    DuplicateCard { board: String, card: String },
    Board { board: String, source: ConfigError },
    UnknownBoard(String),
}

impl std::fmt::Display for SiteConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteConfigError::Parse(msg) => write!(f, "Invalid board config: {}", msg),
            SiteConfigError::DuplicateBoard(id) => write!(f, "Duplicate board id: {}", id),
            SiteConfigError::DuplicateCard { board, card } => {
                write!(f, "Duplicate card id {} on board {}", card, board)
            }
            SiteConfigError::Board { board, source } => write!(f, "Board {}: {}", board, source),
            SiteConfigError::UnknownBoard(id) => write!(f, "No board named {}", id),
        }
    }
}

impl std::error::Error for SiteConfigError {}

impl SiteConfig {
    /// Boards shipped with the site
    pub fn embedded() -> Result<Self, SiteConfigError> {
        Self::from_json(BOARDS_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| SiteConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteConfigError> {
        let mut board_ids = HashSet::new();
        for board in &self.boards {
            if !board_ids.insert(board.id.as_str()) {
                return Err(SiteConfigError::DuplicateBoard(board.id.clone()));
            }
            board.validate()?;
        }
        Ok(())
    }

    pub fn board(&self, id: &str) -> Result<&BoardConfig, SiteConfigError> {
        self.boards
            .iter()
            .find(|board| board.id == id)
            .ok_or_else(|| SiteConfigError::UnknownBoard(id.to_string()))
    }
}

impl BoardConfig {
    fn validate(&self) -> Result<(), SiteConfigError> {
        let mut card_ids = HashSet::new();
        for item in &self.items {
            if !card_ids.insert(item.id.as_str()) {
                return Err(SiteConfigError::DuplicateCard {
                    board: self.id.clone(),
                    card: item.id.clone(),
                });
            }
        }
        self.card_set_config().map(|_| ())
    }

    /// Title of the card shown first for `order`, if any
    pub fn top_title(&self, order: &[String]) -> Option<String> {
        let first = order.first()?;
        self.items
            .iter()
            .find(|item| &item.id == first)
            .map(|item| item.title.clone())
    }

    /// Persistence settings for this board's card set
    pub fn card_set_config(&self) -> Result<CardSetConfig, SiteConfigError> {
        CardSetConfig::from_flags(self.enable_persistence, self.storage_key.clone())
            .map_err(|source| SiteConfigError::Board { board: self.id.clone(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_order::Persistence;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::embedded().expect("embedded boards should parse");

        let projects = config.board("projects").unwrap();
        assert!(projects.enable_persistence);
        assert_eq!(projects.items.len(), 6);
        assert_eq!(
            projects.card_set_config().unwrap().persistence,
            Persistence::Enabled { storage_key: "folio.projects.order".to_string() }
        );

        let skills = config.board("skills").unwrap();
        assert_eq!(skills.card_set_config().unwrap().persistence, Persistence::Disabled);
        assert_eq!(skills.notice_timeout_ms, 5000);
    }

    #[test]
    fn test_top_title_follows_order() {
        let config = SiteConfig::embedded().unwrap();
        let projects = config.board("projects").unwrap();
        let order = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();

        assert_eq!(projects.top_title(&order(&["3", "1", "2"])).as_deref(), Some("Component Library"));
        // Canonical order again after a reset
        let canonical: Vec<String> = projects.items.iter().map(|item| item.id.clone()).collect();
        assert_eq!(projects.top_title(&canonical).as_deref(), Some("Weather Dashboard"));
        assert_eq!(projects.top_title(&[]), None);
        assert_eq!(projects.top_title(&order(&["gone"])), None);
    }

    #[test]
    fn test_unknown_board() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(
            config.board("blog").unwrap_err(),
            SiteConfigError::UnknownBoard("blog".to_string())
        );
    }

    #[test]
    fn test_persistence_without_key_rejected() {
        let raw = r#"{"boards":[{"id":"b","heading":"B","enable_persistence":true,"items":[]}]}"#;
        assert_eq!(
            SiteConfig::from_json(raw).unwrap_err(),
            SiteConfigError::Board { board: "b".to_string(), source: ConfigError::MissingStorageKey }
        );
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let raw = r#"{"boards":[{"id":"b","heading":"B","items":[
            {"id":"1","title":"One","description":""},
            {"id":"1","title":"Again","description":""}
        ]}]}"#;
        assert_eq!(
            SiteConfig::from_json(raw).unwrap_err(),
            SiteConfigError::DuplicateCard { board: "b".to_string(), card: "1".to_string() }
        );
    }

    #[test]
    fn test_duplicate_board_rejected() {
        let raw = r#"{"boards":[
            {"id":"b","heading":"B","items":[]},
            {"id":"b","heading":"B2","items":[]}
        ]}"#;
        assert_eq!(
            SiteConfig::from_json(raw).unwrap_err(),
            SiteConfigError::DuplicateBoard("b".to_string())
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(SiteConfig::from_json("{"), Err(SiteConfigError::Parse(_))));
    }
}
