//! In-memory menu store with write-through persistence.
//!
//! The store holds the canonical menu collection. Every mutation updates
//! memory first and immediately mirrors the full collection to the
//! persistence adapter. Insertion order is preserved for display.

use crate::errors::AppError;
use crate::models::{Category, MenuItem};
use crate::storage::MenuStorage;

/// How the store treats an insert whose id is already present.
///
/// The original console silently allowed colliding ids; this surfaces the
/// choice as configuration instead of guessing the intended behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateIdPolicy {
    /// Refuse the insert with a conflict error.
    #[default]
    Reject,
    /// Replace the existing record in place.
    Overwrite,
    /// Append regardless, allowing duplicates to coexist.
    AllowDuplicate,
}

impl DuplicateIdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateIdPolicy::Reject => "reject",
            DuplicateIdPolicy::Overwrite => "overwrite",
            DuplicateIdPolicy::AllowDuplicate => "allow_duplicate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reject" => Some(DuplicateIdPolicy::Reject),
            "overwrite" => Some(DuplicateIdPolicy::Overwrite),
            "allow_duplicate" => Some(DuplicateIdPolicy::AllowDuplicate),
            _ => None,
        }
    }
}

/// Canonical in-memory menu collection, mirrored to storage on every mutation.
pub struct MenuStore {
    items: Vec<MenuItem>,
    storage: MenuStorage,
    policy: DuplicateIdPolicy,
    generation: u64,
}

impl MenuStore {
    pub fn new(storage: MenuStorage, policy: DuplicateIdPolicy) -> Self {
        Self {
            items: Vec::new(),
            storage,
            policy,
            generation: 0,
        }
    }

    /// The current collection, in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The fixed category list.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Monotonic counter bumped on every change to the collection.
    /// The listing view uses it to detect that its input changed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discard the in-memory collection and re-hydrate from storage.
    pub async fn load_items(&mut self) {
        self.items = self.storage.load().await;
        self.generation += 1;
    }

    /// Append a new item, subject to the duplicate-id policy, and persist.
    ///
    /// Note: even when the save fails the in-memory mutation stands; the
    /// error tells the caller that persisted state is now behind.
    pub async fn add_item(&mut self, item: MenuItem) -> Result<MenuItem, AppError> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            match self.policy {
                DuplicateIdPolicy::Reject => {
                    return Err(AppError::Conflict(format!(
                        "Menu item {} already exists",
                        item.id
                    )));
                }
                DuplicateIdPolicy::Overwrite => {
                    let updated = self.update_item(item).await?;
                    // update_item found a match, so the record is always present
                    return updated.ok_or_else(|| {
                        AppError::Internal("Overwrite lost the existing record".to_string())
                    });
                }
                DuplicateIdPolicy::AllowDuplicate => {}
            }
        }

        self.items.push(item.clone());
        self.generation += 1;
        self.storage.save(&self.items).await?;
        Ok(item)
    }

    /// Replace the first record with a matching id wholesale.
    ///
    /// Returns `Ok(None)` without persisting when no record matches.
    pub async fn update_item(&mut self, item: MenuItem) -> Result<Option<MenuItem>, AppError> {
        let Some(index) = self.items.iter().position(|existing| existing.id == item.id) else {
            return Ok(None);
        };

        self.items[index] = item.clone();
        self.generation += 1;
        self.storage.save(&self.items).await?;
        Ok(Some(item))
    }

    /// Remove every record with the given id and persist unconditionally.
    ///
    /// Removing more than one record is possible when the allow-duplicate
    /// policy let colliding ids coexist. Returns the number removed.
    pub async fn delete_item(&mut self, id: &str) -> Result<usize, AppError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = before - self.items.len();

        if removed > 0 {
            self.generation += 1;
        }
        self.storage.save(&self.items).await?;
        Ok(removed)
    }

    /// Return a snapshot of the first record with a matching id.
    pub fn select_item(&self, id: &str) -> Option<MenuItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }
}
