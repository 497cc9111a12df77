//! Card Set Configuration

use serde::{Deserialize, Serialize};

/// Called with the new id order after every committed move
pub type OrderListener = Box<dyn FnMut(&[String])>;

/// Whether and where a card set persists its order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Persistence {
    #[default]
    Disabled,
    Enabled { storage_key: String },
}

impl Persistence {
    pub fn storage_key(&self) -> Option<&str> {
        match self {
            Persistence::Disabled => None,
            Persistence::Enabled { storage_key } => Some(storage_key),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Persistence enabled without a usable storage key
    MissingStorageKey,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingStorageKey => write!(f, "Persistence enabled but no storage key given"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Construction parameters for `OrderedCardSet` (besides the cards)
#[derive(Default)]
pub struct CardSetConfig {
    pub persistence: Persistence,
    pub(crate) on_order_change: Option<OrderListener>,
}

impl CardSetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an `enable_persistence` flag and optional key
    pub fn from_flags(enable_persistence: bool, storage_key: Option<String>) -> Result<Self, ConfigError> {
        if !enable_persistence {
            return Ok(Self::new());
        }
        match storage_key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new().persist_to(key)),
            _ => Err(ConfigError::MissingStorageKey),
        }
    }

    pub fn persist_to(mut self, storage_key: impl Into<String>) -> Self {
        self.persistence = Persistence::Enabled { storage_key: storage_key.into() };
        self
    }

    pub fn on_order_change(mut self, listener: impl FnMut(&[String]) + 'static) -> Self {
        self.on_order_change = Some(Box::new(listener));
        self
    }
}

impl std::fmt::Debug for CardSetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardSetConfig")
            .field("persistence", &self.persistence)
            .field("on_order_change", &self.on_order_change.is_some())
            .finish()
    }
}
