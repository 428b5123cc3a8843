//! User directory
//!
//! This module provides the user-control layer: account creation, the
//! cached lookup paths, and the sign-in/sign-out flow. The directory
//! fronts the durable user store with a capacity-bounded identity cache.
//!
//! Cache population is deliberately narrow and mirrors the observed
//! behavior of the system this layer descends from: only `create_user`
//! writes to the cache. A by-id lookup that misses the cache and hits
//! the store does NOT backfill, and by-email lookups bypass the cache
//! entirely. See DESIGN.md before "fixing" either.

use crate::errors::CurioError;
use crate::session::Session;
use catalog_store::{User, UserProfile, UserRecords};
use config::DirectoryConfig;
use memory_cache::{CacheParams, SharedCache};

/// User control with an embedded identity cache.
///
/// The cache is an explicitly owned instance scoped to this directory;
/// entries never expire by time and only leave under capacity pressure.
pub struct UserDirectory<S: UserRecords> {
    store: S,
    cache: SharedCache<i32, User>,
}

impl<S: UserRecords> UserDirectory<S> {
    pub fn new(store: S, config: &DirectoryConfig) -> Self {
        Self::with_cache(
            store,
            SharedCache::new(CacheParams::capacity_only(config.cache_capacity)),
        )
    }

    /// Build around a caller-provided cache handle
    pub fn with_cache(store: S, cache: SharedCache<i32, User>) -> Self {
        Self { store, cache }
    }

    /// Create a user record from a verified identity profile and cache it
    pub async fn create_user(&self, profile: UserProfile) -> Result<User, CurioError> {
        let user = self.store.create(profile).await?;
        self.cache.put(user.id, user.clone()).await;
        Ok(user)
    }

    /// Fetch a user by id, consulting the identity cache first.
    ///
    /// A store hit after a cache miss is not written back to the cache.
    pub async fn lookup_by_id(&self, id: i32) -> Result<User, CurioError> {
        if let Some(user) = self.cache.get(&id).await {
            tracing::debug!(user_id = id, "identity cache hit");
            return Ok(user);
        }
        tracing::debug!(user_id = id, "identity cache miss");
        Ok(self.store.find_by_id(id).await?)
    }

    /// Fetch a user by email, straight from the store
    pub async fn lookup_by_email(&self, email: &str) -> Result<Option<User>, CurioError> {
        Ok(self.store.find_by_email(email).await?)
    }

    /// Resolve the session's user, if any is recorded
    pub async fn current_user(&self, session: &Session) -> Result<Option<User>, CurioError> {
        match session.user_id {
            Some(id) => Ok(Some(self.lookup_by_id(id).await?)),
            None => Ok(None),
        }
    }

    /// Resolve the profile's account by email, creating it on first
    /// sign-in, and stamp the session
    pub async fn sign_in(
        &self,
        session: &mut Session,
        profile: UserProfile,
    ) -> Result<User, CurioError> {
        let user = match self.lookup_by_email(&profile.email).await? {
            Some(user) => user,
            None => self.create_user(profile).await?,
        };
        session.stamp(&user);
        tracing::debug!(user_id = user.id, "signed in");
        Ok(user)
    }

    /// Clear the session. Revoking the provider token is the host's job
    /// and happens before this is called.
    pub fn sign_out(&self, session: &mut Session) {
        if let Some(user_id) = session.user_id {
            tracing::debug!(user_id, "signed out");
        }
        session.clear();
    }
}
