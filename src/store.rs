//! Per-user record storage: inventory items and preferences.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{FridgeError, Result};
use crate::inventory::NewItem;
use crate::model::{InventoryItem, UserPreferences};

/// Item collection scoped to one user
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Validate and store a new item, assigning its id and creation time
    async fn create(&self, user_id: &str, item: NewItem) -> Result<InventoryItem>;

    /// All items of the user, newest first
    async fn list(&self, user_id: &str) -> Result<Vec<InventoryItem>>;

    async fn delete(&self, user_id: &str, item_id: &str) -> Result<()>;
}

/// One preferences document per user with upsert semantics
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Stored preferences, or all-false defaults when none were saved
    async fn get(&self, user_id: &str) -> Result<UserPreferences>;

    async fn upsert(&self, user_id: &str, prefs: UserPreferences) -> Result<()>;
}

/// In-process store, used by the CLI and tests
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, Vec<InventoryItem>>>,
    preferences: Mutex<HashMap<String, UserPreferences>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn create(&self, user_id: &str, item: NewItem) -> Result<InventoryItem> {
        let item = item.into_item(Uuid::new_v4().to_string(), Utc::now())?;
        self.items
            .lock()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<InventoryItem>> {
        let items = self.items.lock().await;
        // Reverse insertion order first so equal timestamps still list newest first
        let mut listed: Vec<InventoryItem> = items
            .get(user_id)
            .map(|items| items.iter().rev().cloned().collect())
            .unwrap_or_default();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn delete(&self, user_id: &str, item_id: &str) -> Result<()> {
        let mut items = self.items.lock().await;
        let user_items = items
            .get_mut(user_id)
            .ok_or_else(|| FridgeError::NotFound(format!("item {}", item_id)))?;

        let before = user_items.len();
        user_items.retain(|item| item.id != item_id);
        if user_items.len() == before {
            return Err(FridgeError::NotFound(format!("item {}", item_id)));
        }
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, user_id: &str) -> Result<UserPreferences> {
        Ok(self
            .preferences
            .lock()
            .await
            .get(user_id)
            .copied()
            .unwrap_or_default())
    }

    async fn upsert(&self, user_id: &str, prefs: UserPreferences) -> Result<()> {
        self.preferences
            .lock()
            .await
            .insert(user_id.to_string(), prefs);
        Ok(())
    }
}
