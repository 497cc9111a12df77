//! Ordered Card Set
//!
//! Drag-and-drop state machine over a list of cards.
//!
//! ```text
//! Idle --begin_drag--> Dragging --hover_slot--> Hovering
//!                        ^  |                     |
//!                        |  +----leave_slot-------+
//!                        |
//! commit_drop / cancel_drag from Dragging or Hovering --> Idle
//! ```
//!
//! Only `commit_drop` and `reset_to_default` reach the persistence adapter.

use std::collections::HashSet;

use crate::config::{CardSetConfig, OrderListener};
use crate::item::{ids_of, CardItem};
use crate::reconcile::reconcile;
use crate::storage::PersistenceAdapter;

/// Where the current drag gesture is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging { from: usize },
    Hovering { from: usize, over: usize },
}

pub struct OrderedCardSet<A> {
    canonical: Vec<CardItem>,
    items: Vec<CardItem>,
    dragged_index: Option<usize>,
    drag_over_index: Option<usize>,
    pending_notice: bool,
    storage_key: Option<String>,
    adapter: A,
    on_order_change: Option<OrderListener>,
}

impl<A: PersistenceAdapter> OrderedCardSet<A> {
    /// Build a set from its canonical cards.
    ///
    /// With persistence enabled the saved order (if any) is loaded once and
    /// reconciled against `canonical`.
    ///
    /// # Panics
    /// If two canonical cards share an id.
    pub fn new(canonical: Vec<CardItem>, config: CardSetConfig, adapter: A) -> Self {
        assert_unique_ids(&canonical);

        let storage_key = config.persistence.storage_key().map(str::to_string);
        let items = match storage_key.as_deref().and_then(|key| adapter.load(key)) {
            Some(saved) => {
                tracing::debug!(key = ?storage_key, saved = ?saved, "restoring card order");
                reconcile(&canonical, &saved)
            }
            None => canonical.clone(),
        };

        Self {
            canonical,
            items,
            dragged_index: None,
            drag_over_index: None,
            pending_notice: false,
            storage_key,
            adapter,
            on_order_change: config.on_order_change,
        }
    }

    pub fn items(&self) -> &[CardItem] {
        &self.items
    }

    pub fn ids(&self) -> Vec<String> {
        ids_of(&self.items)
    }

    pub fn canonical(&self) -> &[CardItem] {
        &self.canonical
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.dragged_index
    }

    pub fn drag_over_index(&self) -> Option<usize> {
        self.drag_over_index
    }

    /// A committed move has not been acknowledged yet
    pub fn pending_notice(&self) -> bool {
        self.pending_notice
    }

    pub fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self) -> DragPhase {
        match (self.dragged_index, self.drag_over_index) {
            (None, _) => DragPhase::Idle,
            (Some(from), None) => DragPhase::Dragging { from },
            (Some(from), Some(over)) => DragPhase::Hovering { from, over },
        }
    }

    /// Start dragging the card at `index`. Restarts any active gesture.
    ///
    /// # Panics
    /// If `index` is not a rendered card.
    pub fn begin_drag(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "begin_drag index {} out of range for {} cards",
            index,
            self.items.len()
        );
        tracing::debug!(index, "drag started");
        self.dragged_index = Some(index);
        self.drag_over_index = None;
    }

    /// Mark `index` as the candidate drop slot. Ignored when idle or when
    /// `index` is not a card slot.
    pub fn hover_slot(&mut self, index: usize) {
        if self.dragged_index.is_none() || index >= self.items.len() {
            return;
        }
        self.drag_over_index = Some(index);
    }

    pub fn leave_slot(&mut self) {
        self.drag_over_index = None;
    }

    /// Finish the gesture by moving the dragged card to `drop_index`.
    ///
    /// The card is removed first and reinserted at `drop_index` of the
    /// shortened list, so `[A,B,C,D]` dragging 0 onto 2 gives `[B,C,A,D]`.
    /// A `drop_index` past the end appends the card. Returns whether the
    /// order changed. Dropping on the origin or with no active drag changes
    /// nothing.
    pub fn commit_drop(&mut self, drop_index: usize) -> bool {
        let dragged = self.dragged_index.take();
        self.drag_over_index = None;

        // An active drag implies at least one card
        let to = drop_index.min(self.items.len().saturating_sub(1));
        let from = match dragged {
            Some(from) if from != to => from,
            _ => {
                tracing::debug!(?dragged, drop_index, "drop without move");
                return false;
            }
        };

        let moved = self.items.remove(from);
        self.items.insert(to, moved);

        let order = self.ids();
        tracing::info!(from, to, order = ?order, "card moved");

        if let Some(key) = self.storage_key.as_deref() {
            self.adapter.save(key, &order);
            self.pending_notice = true;
        }
        if let Some(listener) = self.on_order_change.as_mut() {
            listener(&order);
        }
        true
    }

    /// Abandon the gesture without reordering
    pub fn cancel_drag(&mut self) {
        if self.dragged_index.is_some() {
            tracing::debug!("drag cancelled");
        }
        self.dragged_index = None;
        self.drag_over_index = None;
    }

    /// Back to canonical order, forgetting the saved one
    pub fn reset_to_default(&mut self) {
        self.items = self.canonical.clone();
        self.dragged_index = None;
        self.drag_over_index = None;
        self.pending_notice = false;

        if let Some(key) = self.storage_key.as_deref() {
            self.adapter.remove(key);
        }
        tracing::info!(key = ?self.storage_key, "card order reset");
    }

    pub fn dismiss_notice(&mut self) {
        self.pending_notice = false;
    }
}

fn assert_unique_ids(items: &[CardItem]) {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        assert!(seen.insert(item.id.as_str()), "duplicate card id {:?}", item.id);
    }
}

impl<A> std::fmt::Debug for OrderedCardSet<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedCardSet")
            .field("items", &ids_of(&self.items))
            .field("dragged_index", &self.dragged_index)
            .field("drag_over_index", &self.drag_over_index)
            .field("pending_notice", &self.pending_notice)
            .field("storage_key", &self.storage_key)
            .finish()
    }
}
