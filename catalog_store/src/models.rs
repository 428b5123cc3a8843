//! Record models for the catalog tables
//!
//! This module defines the row types the stores read and write, the
//! creation inputs, and the JSON feed shape items publish.

use crate::errors::CatalogStoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user, as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Verified identity attributes for creating a [`User`].
///
/// These are the fields the external identity provider yields once its
/// token exchange has succeeded; the exchange itself happens outside
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            picture: None,
        }
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn validate(&self) -> Result<(), CatalogStoreError> {
        if self.name.trim().is_empty() {
            return Err(CatalogStoreError::ValidationError(
                "user name cannot be empty".to_string(),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(CatalogStoreError::ValidationError(
                "user email cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// An item grouping owned by one user, as stored in the `category` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
}

/// A catalog entry, as stored in the `item` table.
///
/// `created` is stamped by the database on insert; `updated` stays null
/// until the first edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub category_id: i32,
    pub user_id: i32,
}

/// Creation/edit input for an [`Item`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, category_id: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            category_id,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), CatalogStoreError> {
        if self.name.trim().is_empty() {
            return Err(CatalogStoreError::ValidationError(
                "item name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Published JSON shape of an item.
///
/// Timestamps are RFC 3339; `updated` is omitted for never-edited items.
/// The category is flattened to its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFeedEntry {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Item {
    /// Build the feed entry for this item, given its category's name
    pub fn feed_entry(&self, category_name: &str) -> ItemFeedEntry {
        ItemFeedEntry {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            created: self.created.to_rfc3339(),
            category: category_name.to_string(),
            updated: self.updated.map(|updated| updated.to_rfc3339()),
        }
    }
}

impl ItemFeedEntry {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CatalogStoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
