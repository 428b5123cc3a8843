//! Catalog service
//!
//! This module provides the catalog's read and mutation paths over the
//! category and item stores. Browsing is open; mutations require a
//! signed-in user, and item edits/deletes additionally require the
//! caller to own the item. Item-by-id reads go through a bounded,
//! TTL'd record cache that is refreshed on edit and dropped on delete.

use crate::errors::CurioError;
use catalog_store::{
    Category, CategoryRecords, CatalogStoreError, Item, ItemDraft, ItemFeedEntry, ItemRecords,
    User,
};
use memory_cache::{CacheParams, SharedCache};
use std::collections::HashMap;

/// How many items the landing view shows
pub const LATEST_ITEMS: i64 = 10;

/// Owner-checked catalog operations over the durable stores
pub struct CatalogService<C: CategoryRecords, I: ItemRecords> {
    categories: C,
    items: I,
    item_cache: SharedCache<i32, Item>,
}

impl<C: CategoryRecords, I: ItemRecords> CatalogService<C, I> {
    pub fn new(categories: C, items: I, cache_params: CacheParams) -> Self {
        Self {
            categories,
            items,
            item_cache: SharedCache::new(cache_params),
        }
    }

    // --- read paths ---

    /// All categories in name order
    pub async fn categories(&self) -> Result<Vec<Category>, CurioError> {
        Ok(self.categories.list_all().await?)
    }

    /// The newest items across all categories, for the landing view
    pub async fn latest_items(&self) -> Result<Vec<Item>, CurioError> {
        Ok(self.items.latest(LATEST_ITEMS).await?)
    }

    /// A category and its items, newest first
    pub async fn items_in(&self, category_name: &str) -> Result<(Category, Vec<Item>), CurioError> {
        let category = self
            .categories
            .find_by_name(category_name)
            .await?
            .ok_or_else(|| CurioError::NotFound(format!("category '{category_name}'")))?;
        let items = self.items.list_by_category(category.id).await?;
        Ok((category, items))
    }

    /// A single item addressed by category and item name
    pub async fn item_in_category(
        &self,
        category_name: &str,
        item_name: &str,
    ) -> Result<Item, CurioError> {
        let category = self
            .categories
            .find_by_name(category_name)
            .await?
            .ok_or_else(|| CurioError::NotFound(format!("category '{category_name}'")))?;
        self.items
            .find_in_category(item_name, category.id)
            .await?
            .ok_or_else(|| {
                CurioError::NotFound(format!("item '{item_name}' in category '{category_name}'"))
            })
    }

    /// Fetch an item by id through the record cache.
    ///
    /// Unlike the identity cache, this path does populate on a store
    /// hit; entries age out by TTL.
    pub async fn item_by_id(&self, id: i32) -> Result<Option<Item>, CurioError> {
        if let Some(item) = self.item_cache.get(&id).await {
            tracing::debug!(item_id = id, "item cache hit");
            return Ok(Some(item));
        }

        tracing::debug!(item_id = id, "item cache miss");
        let found = self.items.get_by_id(id).await?;
        if let Some(item) = &found {
            self.item_cache.put(id, item.clone()).await;
        }
        Ok(found)
    }

    /// Every item as a feed entry, newest first
    pub async fn feed(&self) -> Result<Vec<ItemFeedEntry>, CurioError> {
        let names: HashMap<i32, String> = self
            .categories
            .list_all()
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        self.items
            .list_all_newest_first()
            .await?
            .into_iter()
            .map(|item| {
                let name = names.get(&item.category_id).ok_or_else(|| {
                    CurioError::NotFound(format!(
                        "category {} for item {}",
                        item.category_id, item.id
                    ))
                })?;
                Ok(item.feed_entry(name))
            })
            .collect()
    }

    /// Feed entry for one item
    pub async fn item_feed_entry(&self, id: i32) -> Result<ItemFeedEntry, CurioError> {
        let item = self
            .item_by_id(id)
            .await?
            .ok_or_else(|| CurioError::NotFound(format!("item {id}")))?;
        let category = self
            .categories
            .get_by_id(item.category_id)
            .await?
            .ok_or_else(|| {
                CurioError::NotFound(format!("category {} for item {}", item.category_id, id))
            })?;
        Ok(item.feed_entry(&category.name))
    }

    // --- mutation paths ---

    /// Create a category owned by the current user
    pub async fn add_category(
        &self,
        current_user: Option<&User>,
        name: &str,
    ) -> Result<Category, CurioError> {
        let user = require_user(current_user)?;
        if name.trim().is_empty() {
            return Err(CatalogStoreError::ValidationError(
                "category name cannot be empty".to_string(),
            )
            .into());
        }
        Ok(self.categories.create(name, user.id).await?)
    }

    /// Create an item owned by the current user
    pub async fn add_item(
        &self,
        current_user: Option<&User>,
        draft: ItemDraft,
    ) -> Result<Item, CurioError> {
        let user = require_user(current_user)?;
        draft.validate()?;
        Ok(self.items.create(draft, user.id).await?)
    }

    /// Rewrite an item the current user owns, refreshing the cached copy
    pub async fn edit_item(
        &self,
        current_user: Option<&User>,
        id: i32,
        draft: ItemDraft,
    ) -> Result<Item, CurioError> {
        let user = require_user(current_user)?;
        draft.validate()?;
        self.require_owner(user, id).await?;

        let updated = self.items.update(id, draft).await?;
        self.item_cache.put(id, updated.clone()).await;
        Ok(updated)
    }

    /// Delete an item the current user owns, dropping the cached copy
    pub async fn delete_item(&self, current_user: Option<&User>, id: i32) -> Result<(), CurioError> {
        let user = require_user(current_user)?;
        self.require_owner(user, id).await?;

        if !self.items.delete(id).await? {
            return Err(CurioError::NotFound(format!("item {id}")));
        }
        self.item_cache.remove(&id).await;
        Ok(())
    }

    async fn require_owner(&self, user: &User, item_id: i32) -> Result<(), CurioError> {
        let item = self
            .items
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| CurioError::NotFound(format!("item {item_id}")))?;
        if item.user_id != user.id {
            return Err(CurioError::NotOwner {
                user_id: user.id,
                kind: "item",
                id: item_id,
            });
        }
        Ok(())
    }
}

fn require_user(current_user: Option<&User>) -> Result<&User, CurioError> {
    current_user.ok_or(CurioError::SignedOut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MemoryCategories {
        categories: Mutex<Vec<Category>>,
        next_id: AtomicI32,
    }

    #[async_trait::async_trait]
    impl CategoryRecords for MemoryCategories {
        async fn create(&self, name: &str, user_id: i32) -> Result<Category, CatalogStoreError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let category = Category {
                id,
                name: name.to_string(),
                user_id,
            };
            self.categories.lock().unwrap().push(category.clone());
            Ok(category)
        }

        async fn list_all(&self) -> Result<Vec<Category>, CatalogStoreError> {
            let mut all = self.categories.lock().unwrap().clone();
            all.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(all)
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Category>, CatalogStoreError> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CatalogStoreError> {
            Ok(self
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.name == name)
                .cloned())
        }

        async fn count(&self) -> Result<i64, CatalogStoreError> {
            Ok(self.categories.lock().unwrap().len() as i64)
        }
    }

    #[derive(Default)]
    struct MemoryItems {
        items: Mutex<Vec<Item>>,
        next_id: AtomicI32,
        reads: AtomicUsize,
    }

    impl MemoryItems {
        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        fn newest_first(&self) -> Vec<Item> {
            let mut all = self.items.lock().unwrap().clone();
            all.sort_by(|a, b| (b.created, b.id).cmp(&(a.created, a.id)));
            all
        }
    }

    #[async_trait::async_trait]
    impl ItemRecords for MemoryItems {
        async fn create(&self, draft: ItemDraft, user_id: i32) -> Result<Item, CatalogStoreError> {
            draft.validate()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let item = Item {
                id,
                name: draft.name,
                description: draft.description,
                created: Utc::now(),
                updated: None,
                category_id: draft.category_id,
                user_id,
            };
            self.items.lock().unwrap().push(item.clone());
            Ok(item)
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Item>, CatalogStoreError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
        }

        async fn update(&self, id: i32, draft: ItemDraft) -> Result<Item, CatalogStoreError> {
            draft.validate()?;
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| CatalogStoreError::not_found("item", id))?;
            item.name = draft.name;
            item.description = draft.description;
            item.category_id = draft.category_id;
            item.updated = Some(Utc::now());
            Ok(item.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, CatalogStoreError> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|i| i.id != id);
            Ok(items.len() < before)
        }

        async fn latest(&self, limit: i64) -> Result<Vec<Item>, CatalogStoreError> {
            Ok(self.newest_first().into_iter().take(limit as usize).collect())
        }

        async fn list_by_category(&self, category_id: i32) -> Result<Vec<Item>, CatalogStoreError> {
            Ok(self
                .newest_first()
                .into_iter()
                .filter(|i| i.category_id == category_id)
                .collect())
        }

        async fn find_in_category(
            &self,
            name: &str,
            category_id: i32,
        ) -> Result<Option<Item>, CatalogStoreError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.name == name && i.category_id == category_id)
                .cloned())
        }

        async fn list_all_newest_first(&self) -> Result<Vec<Item>, CatalogStoreError> {
            Ok(self.newest_first())
        }

        async fn count(&self) -> Result<i64, CatalogStoreError> {
            Ok(self.items.lock().unwrap().len() as i64)
        }
    }

    fn service() -> CatalogService<MemoryCategories, MemoryItems> {
        CatalogService::new(
            MemoryCategories::default(),
            MemoryItems::default(),
            CacheParams::bounded(100, Duration::from_secs(30)),
        )
    }

    fn user(id: i32) -> User {
        User {
            id,
            name: format!("user-{id}"),
            email: format!("user-{id}@example.com"),
            picture: None,
        }
    }

    #[tokio::test]
    async fn signed_out_mutations_are_rejected() {
        let catalog = service();

        assert!(matches!(
            catalog.add_category(None, "Hockey").await,
            Err(CurioError::SignedOut)
        ));
        assert!(matches!(
            catalog.add_item(None, ItemDraft::new("Stick", 1)).await,
            Err(CurioError::SignedOut)
        ));
        assert!(matches!(
            catalog.edit_item(None, 1, ItemDraft::new("Stick", 1)).await,
            Err(CurioError::SignedOut)
        ));
        assert!(matches!(
            catalog.delete_item(None, 1).await,
            Err(CurioError::SignedOut)
        ));
    }

    #[tokio::test]
    async fn blank_names_are_rejected_before_the_store() {
        let catalog = service();
        let owner = user(1);

        assert!(matches!(
            catalog.add_category(Some(&owner), "   ").await,
            Err(CurioError::Store(CatalogStoreError::ValidationError(_)))
        ));
        assert!(matches!(
            catalog.add_item(Some(&owner), ItemDraft::new("", 1)).await,
            Err(CurioError::Store(CatalogStoreError::ValidationError(_)))
        ));
    }

    #[tokio::test]
    async fn only_the_owner_can_edit_or_delete() {
        let catalog = service();
        let owner = user(1);
        let stranger = user(2);

        let category = catalog.add_category(Some(&owner), "Hockey").await.unwrap();
        let item = catalog
            .add_item(Some(&owner), ItemDraft::new("Stick", category.id))
            .await
            .unwrap();

        let err = catalog
            .edit_item(Some(&stranger), item.id, ItemDraft::new("Bat", category.id))
            .await
            .unwrap_err();
        assert!(matches!(err, CurioError::NotOwner { user_id: 2, .. }));

        let err = catalog.delete_item(Some(&stranger), item.id).await.unwrap_err();
        assert!(matches!(err, CurioError::NotOwner { .. }));

        // Nothing changed
        let unchanged = catalog.item_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(unchanged.name, "Stick");
        assert!(unchanged.updated.is_none());
    }

    #[tokio::test]
    async fn item_reads_are_cached_after_the_first_hit() {
        let catalog = service();
        let owner = user(1);
        let category = catalog.add_category(Some(&owner), "Hockey").await.unwrap();
        let item = catalog
            .add_item(Some(&owner), ItemDraft::new("Stick", category.id))
            .await
            .unwrap();

        catalog.item_by_id(item.id).await.unwrap();
        let reads_after_first = catalog.items.reads();
        catalog.item_by_id(item.id).await.unwrap();
        catalog.item_by_id(item.id).await.unwrap();

        assert_eq!(catalog.items.reads(), reads_after_first);
    }

    #[tokio::test]
    async fn edits_refresh_the_cached_item() {
        let catalog = service();
        let owner = user(1);
        let category = catalog.add_category(Some(&owner), "Hockey").await.unwrap();
        let item = catalog
            .add_item(Some(&owner), ItemDraft::new("Stick", category.id))
            .await
            .unwrap();
        catalog.item_by_id(item.id).await.unwrap();

        let edited = catalog
            .edit_item(
                Some(&owner),
                item.id,
                ItemDraft::new("Composite stick", category.id).with_description("carbon"),
            )
            .await
            .unwrap();
        assert!(edited.updated.is_some());

        // The cache serves the edited copy without another store read
        let reads = catalog.items.reads();
        let cached = catalog.item_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(cached.name, "Composite stick");
        assert_eq!(catalog.items.reads(), reads);
    }

    #[tokio::test]
    async fn deletes_drop_the_cached_item() {
        let catalog = service();
        let owner = user(1);
        let category = catalog.add_category(Some(&owner), "Hockey").await.unwrap();
        let item = catalog
            .add_item(Some(&owner), ItemDraft::new("Stick", category.id))
            .await
            .unwrap();
        catalog.item_by_id(item.id).await.unwrap();

        catalog.delete_item(Some(&owner), item.id).await.unwrap();

        assert_eq!(catalog.item_by_id(item.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn browsing_unknown_category_is_not_found() {
        let catalog = service();

        assert!(matches!(
            catalog.items_in("Nope").await,
            Err(CurioError::NotFound(_))
        ));
        assert!(matches!(
            catalog.item_in_category("Nope", "Stick").await,
            Err(CurioError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn feed_resolves_category_names_newest_first() {
        let catalog = service();
        let owner = user(1);
        let hockey = catalog.add_category(Some(&owner), "Hockey").await.unwrap();
        let chess = catalog.add_category(Some(&owner), "Chess").await.unwrap();

        catalog
            .add_item(Some(&owner), ItemDraft::new("Stick", hockey.id))
            .await
            .unwrap();
        let board = catalog
            .add_item(Some(&owner), ItemDraft::new("Board", chess.id))
            .await
            .unwrap();

        let feed = catalog.feed().await.unwrap();
        assert_eq!(feed.len(), 2);
        // newest first: the board was created last
        assert_eq!(feed[0].name, "Board");
        assert_eq!(feed[0].category, "Chess");
        assert_eq!(feed[1].category, "Hockey");

        let entry = catalog.item_feed_entry(board.id).await.unwrap();
        assert_eq!(entry.category, "Chess");
        assert!(entry.updated.is_none());
    }

    #[tokio::test]
    async fn landing_view_caps_at_latest_ten() {
        let catalog = service();
        let owner = user(1);
        let category = catalog.add_category(Some(&owner), "Hockey").await.unwrap();
        for i in 0..12 {
            catalog
                .add_item(Some(&owner), ItemDraft::new(format!("item-{i}"), category.id))
                .await
                .unwrap();
        }

        let latest = catalog.latest_items().await.unwrap();
        assert_eq!(latest.len(), LATEST_ITEMS as usize);
        assert_eq!(latest[0].name, "item-11");
    }
}
